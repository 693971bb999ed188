// cleancopy/src/commands/mod.rs
//! Subcommand implementations and the helpers they share.

pub mod clean;
pub mod params;
pub mod sanitize;
pub mod watch;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io;
use std::sync::Arc;

use cleancopy_core::{merge_params, Blacklist, BlacklistConfig, SanitizationEngine, UrlSanitizer};

use crate::cli::BlacklistArgs;
use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Builds the effective blacklist configuration.
///
/// Precedence: embedded defaults, then `--config` (or the per-user file when
/// no `--config` is given), then `--enable` / `--disable`.
pub fn load_blacklist_config(args: &BlacklistArgs) -> Result<BlacklistConfig> {
    let defaults = BlacklistConfig::load_default()?;
    let user = match &args.config {
        Some(path) => Some(
            BlacklistConfig::load_from_file(path)
                .with_context(|| format!("Failed to load blacklist '{}'", path.display()))?,
        ),
        None => BlacklistConfig::load_user_config()?,
    };

    let mut config = merge_params(defaults, user);
    config.set_active_params(&args.enable, &args.disable);
    debug!("Effective blacklist: {:?}", config.enabled_names());
    Ok(config)
}

/// Freezes the configuration into the shared engine used by every adapter.
pub fn build_engine(args: &BlacklistArgs) -> Result<Arc<dyn SanitizationEngine>> {
    let config = load_blacklist_config(args)?;
    let blacklist = Arc::new(Blacklist::from_config(&config));
    Ok(Arc::new(UrlSanitizer::new(blacklist)))
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, color);
}
