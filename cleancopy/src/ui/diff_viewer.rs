// cleancopy/src/ui/diff_viewer.rs
//! Unified diff between the original input and the sanitized output.
//!
//! Removed lines are painted with the `DiffRemoved` theme color, added lines
//! with `DiffAdded`.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

pub fn print_diff<W: Write>(
    original: &str,
    sanitized: &str,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let header = "--- Diff View ---";
    if supports_color {
        writeln!(writer, "{}", header.color(color_for(theme_map, ThemeEntry::DiffHeader)))?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    let patch = create_patch(original, sanitized);
    let mut changes = 0usize;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            let (marker, text, entry) = match line {
                DiffLine::Delete(s) => ("-", *s, Some(ThemeEntry::DiffRemoved)),
                DiffLine::Insert(s) => ("+", *s, Some(ThemeEntry::DiffAdded)),
                DiffLine::Context(s) => (" ", *s, None),
            };
            let rendered = format!("{}{}", marker, text.trim_end_matches('\n'));
            match entry {
                Some(entry) => {
                    changes += 1;
                    if supports_color {
                        writeln!(writer, "{}", rendered.color(color_for(theme_map, entry)))?;
                    } else {
                        writeln!(writer, "{}", rendered)?;
                    }
                }
                None => writeln!(writer, "{}", rendered)?,
            }
        }
    }

    if changes == 0 {
        writeln!(writer, "No changes detected.")?;
    }
    writeln!(writer, "-----------------")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn diff_shows_removed_and_added_lines() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_diff(
            "https://example.com/?fbclid=1&a=2\n",
            "https://example.com/?a=2\n",
            &mut buf,
            &theme,
            false,
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("-https://example.com/?fbclid=1&a=2"));
        assert!(out.contains("+https://example.com/?a=2"));
    }

    #[test]
    fn identical_input_reports_no_changes() {
        let theme = ThemeStyle::default_theme_map();
        let mut buf = Vec::new();
        print_diff("hello\n", "hello\n", &mut buf, &theme, false).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("No changes detected."));
    }
}
