//! The user-triggered "clean" command.
//!
//! The host asks the user for text, sanitizes it and, when something was
//! removed, places the result on the clipboard. The outcome is reported back
//! so the host can tell the user whether anything changed. A failed clipboard
//! write is the only error that ever reaches the user.

use log::{error, info};

use crate::clipboard::ClipboardWriter;
use crate::engine::SanitizationEngine;

/// Blocking source of user-entered text.
pub trait Prompt {
    /// Returns `None` when the user cancelled.
    fn prompt(&mut self, message: &str) -> Option<String>;
}

pub const PROMPT_MESSAGE: &str = "Paste the URL to clean:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Cancelled,
    Unchanged,
    Sanitized(String),
    Failed(String),
}

impl CommandOutcome {
    /// Message shown to the user, if any.
    pub fn notice(&self) -> Option<String> {
        match self {
            CommandOutcome::Cancelled => None,
            CommandOutcome::Unchanged => Some("No tracking parameters found; the text is unchanged.".to_string()),
            CommandOutcome::Sanitized(text) => Some(format!("Sanitized and copied to clipboard: {}", text)),
            CommandOutcome::Failed(reason) => Some(format!("Failed to copy sanitized text: {}", reason)),
        }
    }
}

pub async fn run_clean_command<W: ClipboardWriter + ?Sized>(
    engine: &dyn SanitizationEngine,
    prompt: &mut dyn Prompt,
    writer: &W,
) -> CommandOutcome {
    let input = match prompt.prompt(PROMPT_MESSAGE) {
        Some(text) if !text.trim().is_empty() => text,
        _ => return CommandOutcome::Cancelled,
    };

    let report = engine.sanitize_with_report(input.trim());
    if !report.changed {
        info!("clean command: input unchanged");
        return CommandOutcome::Unchanged;
    }

    match writer.write_text(&report.output).await {
        Ok(()) => {
            info!("clean command: copied {}", report.output);
            CommandOutcome::Sanitized(report.output)
        }
        Err(e) => {
            error!("clean command: clipboard write failed: {}", e);
            CommandOutcome::Failed(e.to_string())
        }
    }
}
