// cleancopy/src/ui/mod.rs
//! Terminal output: themes, status messages, diffs and summaries.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
pub mod theme;
