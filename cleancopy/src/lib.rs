// cleancopy/src/lib.rs
//! # CleanCopy CLI
//!
//! The terminal front end for `cleancopy-core`: sanitize text from stdin or
//! files, clean a pasted link on demand, watch the system clipboard, and list
//! the tracking parameters that will be stripped.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
