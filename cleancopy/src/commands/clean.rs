//! `clean` command: prompt for a URL and copy the cleaned version.

use anyhow::{bail, Result};
use std::io::{self, BufRead, Write};

use cleancopy_core::{run_clean_command, CommandOutcome, Prompt};

use crate::cli::CleanCommand;
use crate::commands::{build_engine, error_msg, info_msg, success_msg};
use crate::ui::theme::ThemeMap;
use crate::utils::clipboard::SystemClipboard;

/// Reads one line from a buffered reader after printing the message to stderr.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} ", message);
        let _ = stderr.flush();

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

pub async fn run(cmd: CleanCommand, theme_map: &ThemeMap) -> Result<()> {
    let engine = build_engine(&cmd.blacklist)?;
    let mut prompt = LinePrompt::new(io::stdin().lock());
    let clipboard = SystemClipboard::new();

    let outcome = run_clean_command(engine.as_ref(), &mut prompt, &clipboard).await;
    eprintln!();

    match &outcome {
        CommandOutcome::Cancelled => Ok(()),
        CommandOutcome::Unchanged => {
            if let Some(notice) = outcome.notice() {
                info_msg(notice, theme_map);
            }
            Ok(())
        }
        CommandOutcome::Sanitized(text) => {
            if let Some(notice) = outcome.notice() {
                success_msg(notice, theme_map);
            }
            println!("{}", text);
            Ok(())
        }
        CommandOutcome::Failed(reason) => {
            if let Some(notice) = outcome.notice() {
                error_msg(notice, theme_map);
            }
            bail!("clipboard write failed: {}", reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_prompt_returns_none_on_eof() {
        let mut prompt = LinePrompt::new(&b""[..]);
        assert_eq!(prompt.prompt("?"), None);

        let mut prompt = LinePrompt::new(&b"https://example.com\n"[..]);
        assert_eq!(prompt.prompt("?").as_deref(), Some("https://example.com\n"));
    }
}
