// cleancopy-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! Adapters (copy events, clipboard writers, the command trigger and the CLI)
//! are written against this trait rather than against a concrete sanitizer,
//! so the blacklist is always passed explicitly and hosts can swap engines.
//!
//! License: MIT OR APACHE 2.0

use crate::blacklist::Blacklist;
use crate::report::{SanitizeReport, SanitizeSummary};

/// A trait that defines the core functionality of a sanitization engine.
pub trait SanitizationEngine: Send + Sync {
    /// Sanitizes a single candidate text and describes what was removed.
    ///
    /// Implementations must never panic and never fail: text that cannot be
    /// handled is returned unchanged.
    fn sanitize_with_report(&self, text: &str) -> SanitizeReport;

    /// Returns the blacklist the engine strips.
    fn blacklist(&self) -> &Blacklist;

    /// Sanitizes a single candidate text.
    fn sanitize(&self, text: &str) -> String {
        self.sanitize_with_report(text).output
    }

    fn sanitize_lines(&self, text: &str) -> String {
        self.sanitize_lines_with_report(text).0
    }

    /// Sanitizes every line of `text` independently, preserving line terminators.
    fn sanitize_lines_with_report(&self, text: &str) -> (String, SanitizeSummary) {
        let mut out = String::with_capacity(text.len());
        let mut summary = SanitizeSummary::default();

        for line in text.split_inclusive('\n') {
            let (body, terminator) = split_terminator(line);
            let report = self.sanitize_with_report(body);
            summary.record(&report);
            out.push_str(&report.output);
            out.push_str(terminator);
        }
        (out, summary)
    }
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
