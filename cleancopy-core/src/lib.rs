// cleancopy-core/src/lib.rs
//! # CleanCopy Core Library
//!
//! `cleancopy-core` removes tracking query parameters (`utm_source`, `fbclid`,
//! `gclid`, ...) from URLs before they reach the clipboard. It holds the
//! platform-independent pieces: the blacklist configuration, the URL
//! sanitizer and thin adapters for the places where text enters a clipboard.
//!
//! ## Modules
//!
//! * `config`: `BlacklistConfig` and `BlacklistedParam`, YAML loading, merging and validation.
//! * `blacklist`: the frozen, immutable `Blacklist` built once at startup.
//! * `sanitizer`: the absolute-URL guard, URL classification and `UrlSanitizer`.
//! * `engine`: the `SanitizationEngine` trait the adapters are written against.
//! * `clipboard`: the `ClipboardWriter` capability and the `SanitizingClipboard` decorator.
//! * `copy_event`: the copy-event handler.
//! * `command`: the user-triggered "clean" command.
//! * `headless`: one-shot helpers.
//! * `report`: per-text and aggregate reports.
//!
//! ## Usage Example
//!
//! ```rust
//! use cleancopy_core::{headless_sanitize_string, BlacklistConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = BlacklistConfig::load_default()?;
//!     let clean = headless_sanitize_string(&config, "https://example.com/?utm_source=x&id=5&fbclid=y");
//!     assert_eq!(clean, "https://example.com/?id=5");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Sanitization itself never fails: text that is not an absolute URL is
//! returned unchanged. Configuration loading uses `anyhow::Error`; clipboard
//! adapters return [`CleanCopyError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod blacklist;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod copy_event;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod report;
pub mod sanitizer;

/// Re-exports the public configuration types and functions.
pub use config::{merge_params, validate_params, BlacklistConfig, BlacklistedParam};

pub use blacklist::Blacklist;

/// Re-exports the custom error type for clear error reporting.
pub use errors::CleanCopyError;

pub use engine::SanitizationEngine;

pub use sanitizer::{classify, looks_like_absolute_url, sanitize, UrlCandidate, UrlSanitizer};

pub use report::{SanitizeReport, SanitizeSummary};

pub use clipboard::{
    install_interception, ClipboardItem, ClipboardWriter, MemoryClipboard, RecordedWrite,
    SanitizingClipboard, TEXT_PLAIN,
};

pub use copy_event::{handle_copy, ClipboardData, CopyOutcome};

pub use command::{run_clean_command, CommandOutcome, Prompt};

/// Re-exports helpers for one-shot, non-interactive use.
pub use headless::{headless_sanitize_report, headless_sanitize_string};
