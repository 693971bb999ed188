// cleancopy/src/logger.rs
//! Logging setup for the CLI.
//!
//! Records go to stderr as `[LEVEL target] message` so stdout stays reserved
//! for sanitized output. `RUST_LOG` is honoured unless an explicit level is
//! forced by a command-line flag.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Crates whose level is forced by `--debug` / `--quiet`.
const OWN_CRATES: &[&str] = &["cleancopy", "cleancopy_core"];

/// Maps the global CLI flags to a forced level, if any.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Error)
    } else if debug && !disable_debug {
        Some(LevelFilter::Debug)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else {
        None
    }
}

/// Initializes the global logger. Calling it twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr).format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    if let Some(level) = level {
        for krate in OWN_CRATES {
            builder.filter_module(krate, level);
        }
    }

    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true, false), Some(LevelFilter::Error));
        assert_eq!(level_from_flags(false, true, false), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, true, true), Some(LevelFilter::Info));
        assert_eq!(level_from_flags(false, false, false), None);
    }
}
