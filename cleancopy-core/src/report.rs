//! report.rs - Result types describing what a sanitization run did.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of sanitizing a single candidate text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    /// The rewritten URL, or the original text when it was not a URL.
    pub output: String,
    /// Whether the candidate passed the absolute-URL guard and parsed.
    pub is_url: bool,
    /// Decoded names of the removed parameters, one entry per removed occurrence, in query order.
    pub removed: Vec<String>,
    /// Whether `output` differs from the input text.
    pub changed: bool,
}

impl SanitizeReport {
    /// Report for text that was returned untouched.
    pub fn untouched(text: &str) -> Self {
        Self {
            output: text.to_string(),
            is_url: false,
            removed: Vec::new(),
            changed: false,
        }
    }

    pub fn params_removed(&self) -> usize {
        self.removed.len()
    }
}

/// Aggregate over many reports (e.g. one per input line).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SanitizeSummary {
    pub urls_found: usize,
    pub urls_modified: usize,
    /// Removed parameter name -> number of occurrences removed.
    pub removed: BTreeMap<String, usize>,
}

impl SanitizeSummary {
    pub fn record(&mut self, report: &SanitizeReport) {
        if report.is_url {
            self.urls_found += 1;
        }
        if !report.removed.is_empty() {
            self.urls_modified += 1;
        }
        for name in &report.removed {
            *self.removed.entry(name.clone()).or_insert(0) += 1;
        }
    }

    pub fn merge(&mut self, other: SanitizeSummary) {
        self.urls_found += other.urls_found;
        self.urls_modified += other.urls_modified;
        for (name, count) in other.removed {
            *self.removed.entry(name).or_insert(0) += count;
        }
    }

    pub fn params_removed(&self) -> usize {
        self.removed.values().sum()
    }
}
