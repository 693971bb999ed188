// cleancopy/src/main.rs
//! CleanCopy entry point.
//!
//! Parses the command line, initializes logging and the theme, then hands
//! off to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cleancopy::cli::{Cli, Commands};
use cleancopy::commands::{self, error_msg};
use cleancopy::logger;
use cleancopy::ui::theme::{build_theme_map, ThemeStyle};

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug, args.disable_debug));
    info!("cleancopy started. Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args).await {
        error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    let theme_map = build_theme_map(args.theme.as_ref()).context("Failed to load theme")?;

    match args.command {
        Commands::Sanitize(cmd) => commands::sanitize::run(cmd, args.quiet, &theme_map),
        Commands::Clean(cmd) => commands::clean::run(cmd, &theme_map).await,
        Commands::Watch(cmd) => commands::watch::run(cmd, args.quiet, &theme_map).await,
        Commands::Params(cmd) => commands::params::run(cmd),
    }
}
