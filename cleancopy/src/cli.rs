// cleancopy/src/cli.rs
//! This file defines the command-line interface (CLI) for the cleancopy application,
//! including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "cleancopy",
    author = "Oggetto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Strip tracking parameters from URLs before they reach your clipboard",
    long_about = "CleanCopy removes known tracking query parameters (utm_source, fbclid, gclid and friends) from URLs. It can sanitize text from stdin or a file, watch the system clipboard and rewrite tracked links as they are copied, or clean a single pasted link on demand. Text that is not an absolute http, https or ftp URL is always left untouched.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the cleancopy crates)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `cleancopy` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin, stripping tracking parameters.
    #[command(about = "Sanitizes an input file or stdin, stripping tracking parameters from URLs.")]
    Sanitize(SanitizeCommand),

    /// Prompts for a URL, cleans it and copies the result to the clipboard.
    #[command(about = "Prompts for a URL, cleans it and copies the result to the clipboard.")]
    Clean(CleanCommand),

    /// Watches the system clipboard and rewrites tracked URLs as they are copied.
    #[command(about = "Watches the system clipboard and rewrites tracked URLs as they are copied.")]
    Watch(WatchCommand),

    /// Lists the tracking parameters that will be stripped.
    #[command(about = "Lists the tracking parameters that will be stripped.")]
    Params(ParamsCommand),
}

/// Options shared by every command that builds a blacklist.
#[derive(Args, Debug, Clone, Default)]
pub struct BlacklistArgs {
    /// Path to a custom blacklist file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "CLEANCOPY_CONFIG", help = "Path to a custom blacklist file (YAML).")]
    pub config: Option<PathBuf>,

    /// Additionally strip these parameter names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Additionally strip these parameter names (comma-separated).")]
    pub enable: Vec<String>,

    /// Never strip these parameter names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Never strip these parameter names (comma-separated).")]
    pub disable: Vec<String>,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Copy sanitized output to the system clipboard.
    #[arg(long, short = 'c', help = "Copy sanitized output to the system clipboard.")]
    pub clipboard: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    #[command(flatten)]
    pub blacklist: BlacklistArgs,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", conflicts_with_all = ["diff", "clipboard"], help = "Sanitize each line independently, streaming output as lines arrive.")]
    pub line_buffered: bool,

    /// Suppress the sanitization summary.
    #[arg(long = "no-summary", help = "Suppress the sanitization summary.")]
    pub no_summary: bool,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    #[command(flatten)]
    pub blacklist: BlacklistArgs,
}

/// Arguments for the `watch` command.
#[derive(Parser, Debug)]
pub struct WatchCommand {
    /// Polling interval in milliseconds.
    #[arg(long = "interval-ms", value_name = "MS", default_value_t = 500, value_parser = clap::value_parser!(u64).range(50..), help = "Clipboard polling interval in milliseconds.")]
    pub interval_ms: u64,

    /// Process the current clipboard contents once and exit.
    #[arg(long, help = "Process the current clipboard contents once and exit.")]
    pub once: bool,

    #[command(flatten)]
    pub blacklist: BlacklistArgs,
}

/// Arguments for the `params` command.
#[derive(Parser, Debug)]
pub struct ParamsCommand {
    /// Print the active params as JSON instead of a table.
    #[arg(long, help = "Print the active params as JSON instead of a table.")]
    pub json: bool,

    #[command(flatten)]
    pub blacklist: BlacklistArgs,
}
