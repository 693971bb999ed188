//! `params` command: show the effective blacklist.

use anyhow::{Context, Result};
use std::io::{self, Write};

use cleancopy_core::BlacklistedParam;

use crate::cli::ParamsCommand;
use crate::commands::load_blacklist_config;
use crate::ui::summary::params_table;

pub fn run(cmd: ParamsCommand) -> Result<()> {
    let config = load_blacklist_config(&cmd.blacklist)?;
    let active: Vec<&BlacklistedParam> = config.params.iter().filter(|p| p.is_enabled()).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cmd.json {
        serde_json::to_writer_pretty(&mut out, &active).context("Failed to serialize params")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", params_table(&active))?;
        writeln!(out, "{} parameter(s) will be stripped.", active.len())?;
    }
    Ok(())
}
