//! Copy-event adapter.
//!
//! A copy action hands over the current selection and a writable clipboard
//! payload. The handler always takes over the payload: the sanitized
//! selection is written as `text/plain`, or the empty string when nothing is
//! selected, so the payload is never left unset.

use log::{debug, info};

use crate::clipboard::{ClipboardItem, TEXT_PLAIN};
use crate::engine::SanitizationEngine;

/// The writable payload of a copy event.
pub trait ClipboardData {
    fn set_data(&mut self, mime: &str, value: &str);
}

impl ClipboardData for ClipboardItem {
    fn set_data(&mut self, mime: &str, value: &str) {
        self.set(mime, value.as_bytes());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// No selection; an empty string was written.
    Empty,
    /// The selection was written as-is.
    Unchanged,
    /// The selection was rewritten to the contained string.
    Sanitized(String),
}

pub fn handle_copy(
    engine: &dyn SanitizationEngine,
    selection: Option<&str>,
    data: &mut dyn ClipboardData,
) -> CopyOutcome {
    let content = match selection {
        Some(s) if !s.is_empty() => s,
        _ => {
            data.set_data(TEXT_PLAIN, "");
            debug!("no selection, wrote empty string");
            return CopyOutcome::Empty;
        }
    };
    debug!("copy event, selection=\"{}\"", content);

    let report = engine.sanitize_with_report(content);
    data.set_data(TEXT_PLAIN, &report.output);
    if report.changed {
        info!("sanitized copy -> {}", report.output);
        CopyOutcome::Sanitized(report.output)
    } else {
        debug!("copy content unchanged, wrote original");
        CopyOutcome::Unchanged
    }
}
