// cleancopy-core/src/headless.rs
//! Convenience wrappers for one-shot, non-interactive sanitization.

use crate::config::BlacklistConfig;
use crate::engine::SanitizationEngine;
use crate::report::SanitizeReport;
use crate::sanitizer::UrlSanitizer;

/// Sanitizes `text` against the enabled params of `config`.
///
/// # Arguments
///
/// * `config` - The merged BlacklistConfig (defaults + optional user overrides).
/// * `text` - The candidate text.
pub fn headless_sanitize_string(config: &BlacklistConfig, text: &str) -> String {
    UrlSanitizer::from_config(config).sanitize(text)
}

/// Like [`headless_sanitize_string`] but returns the full report.
pub fn headless_sanitize_report(config: &BlacklistConfig, text: &str) -> SanitizeReport {
    UrlSanitizer::from_config(config).sanitize_with_report(text)
}
