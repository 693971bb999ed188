//! errors.rs - Custom error types for the cleancopy-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! Note that "not a URL" is deliberately absent: it is an ordinary outcome of
//! [`crate::sanitizer::classify`], not a failure.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `cleancopy-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CleanCopyError {
    #[error("Clipboard is not available: {0}")]
    ClipboardUnavailable(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),

    #[error("Clipboard representation '{0}' is not valid UTF-8")]
    InvalidUtf8(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
