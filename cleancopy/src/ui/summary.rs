//! Summary of stripped parameters and the params table.

use cleancopy_core::{BlacklistedParam, SanitizeSummary};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

pub fn print_summary<W: Write>(
    summary: &SanitizeSummary,
    writer: &mut W,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let header = "--- Sanitization Summary ---";
    if supports_color {
        writeln!(writer, "{}", header.color(color_for(theme_map, ThemeEntry::Header)))?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    if summary.removed.is_empty() {
        writeln!(writer, "No tracking parameters found.")?;
    } else {
        for (name, count) in &summary.removed {
            let occurrences = format!("({} occurrences)", count);
            if supports_color {
                writeln!(
                    writer,
                    "{} {}",
                    name.color(color_for(theme_map, ThemeEntry::SummaryParamName)),
                    occurrences.color(color_for(theme_map, ThemeEntry::SummaryOccurrences)),
                )?;
            } else {
                writeln!(writer, "{} {}", name, occurrences)?;
            }
        }
        writeln!(
            writer,
            "{} of {} URL(s) modified.",
            summary.urls_modified, summary.urls_found
        )?;
    }
    writeln!(writer, "----------------------------")?;
    Ok(())
}

/// Renders the active params as a table.
pub fn params_table(params: &[&BlacklistedParam]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Parameter", "Source", "Description"]);
    for param in params {
        table.add_row(vec![
            param.name.as_str(),
            param.source.as_deref().unwrap_or("-"),
            param.description.as_deref().unwrap_or(""),
        ]);
    }
    table
}
