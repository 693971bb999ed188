//! `sanitize` command: strip tracking parameters from a file or stdin.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use cleancopy_core::{SanitizationEngine, SanitizeSummary};

use crate::cli::SanitizeCommand;
use crate::commands::{build_engine, info_msg, success_msg, warn_msg};
use crate::ui::diff_viewer;
use crate::ui::summary;
use crate::ui::theme::ThemeMap;
use crate::utils::clipboard::copy_to_clipboard;

/// Options for the ergonomic run_sanitize_opts API.
pub struct SanitizeOptions {
    pub input: String,
    pub clipboard: bool,
    pub diff: bool,
    pub output_path: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

pub fn run(cmd: SanitizeCommand, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let engine = build_engine(&cmd.blacklist)?;

    if cmd.line_buffered {
        let stdout = io::stdout();
        let summary = match &cmd.input_file {
            Some(path) => {
                let file = fs::File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                run_line_buffered(engine.as_ref(), io::BufReader::new(file), &mut stdout.lock())?
            }
            None => run_line_buffered(engine.as_ref(), io::stdin().lock(), &mut stdout.lock())?,
        };
        if !cmd.no_summary && !quiet {
            print_summary_to_stderr(&summary, theme_map)?;
        }
        return Ok(());
    }

    let input = read_input(cmd.input_file.as_ref())?;
    let opts = SanitizeOptions {
        input,
        clipboard: cmd.clipboard,
        diff: cmd.diff,
        output_path: cmd.output,
        no_summary: cmd.no_summary,
        quiet,
    };
    run_sanitize_opts(engine.as_ref(), opts, theme_map)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin...");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Treats the whole input as one candidate, the way a copied selection is treated.
pub fn run_sanitize_opts(
    engine: &dyn SanitizationEngine,
    opts: SanitizeOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting sanitize operation.");

    let report = engine.sanitize_with_report(&opts.input);
    let mut summary = SanitizeSummary::default();
    summary.record(&report);
    debug!(
        "Input sanitized. Original length: {}, Sanitized length: {}",
        opts.input.len(),
        report.output.len()
    );

    handle_primary_output(&opts, &report.output, theme_map)?;

    if opts.clipboard {
        match copy_to_clipboard(&report.output) {
            Ok(()) => success_msg("Sanitized content copied to clipboard successfully.", theme_map),
            Err(e) => warn_msg(format!("Failed to copy to clipboard: {}", e), theme_map),
        }
    }

    if !opts.no_summary && !opts.quiet {
        print_summary_to_stderr(&summary, theme_map)?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &SanitizeOptions, sanitized: &str, theme_map: &ThemeMap) -> Result<()> {
    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing sanitized content to file: {}", path.display()), theme_map);
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_output(&mut file, &opts.input, sanitized, opts.diff, theme_map, false)?;
        }
        None => {
            let stdout = io::stdout();
            let supports_color = stdout.is_terminal();
            let mut writer = stdout.lock();
            write_output(&mut writer, &opts.input, sanitized, opts.diff, theme_map, supports_color)?;
        }
    }
    Ok(())
}

fn write_output<W: Write>(
    writer: &mut W,
    original: &str,
    sanitized: &str,
    diff: bool,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> Result<()> {
    if diff {
        diff_viewer::print_diff(&with_newline(original), &with_newline(sanitized), writer, theme_map, supports_color)?;
    } else if sanitized.ends_with('\n') || sanitized.is_empty() {
        write!(writer, "{}", sanitized)?;
    } else {
        writeln!(writer, "{}", sanitized)?;
    }
    Ok(())
}

fn with_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{}\n", text)
    }
}

/// Sanitizes each line as it arrives and flushes it immediately.
pub fn run_line_buffered<R: BufRead, W: Write>(
    engine: &dyn SanitizationEngine,
    mut reader: R,
    writer: &mut W,
) -> Result<SanitizeSummary> {
    info!("Starting line-buffered sanitize operation.");
    let mut summary = SanitizeSummary::default();
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read input line")?;
        if read == 0 {
            break;
        }
        let (out, line_summary) = engine.sanitize_lines_with_report(&line);
        summary.merge(line_summary);
        writer.write_all(out.as_bytes())?;
        writer.flush()?;
    }
    Ok(summary)
}

fn print_summary_to_stderr(summary: &SanitizeSummary, theme_map: &ThemeMap) -> Result<()> {
    let stderr = io::stderr();
    let supports_color = stderr.is_terminal();
    summary::print_summary(summary, &mut stderr.lock(), theme_map, supports_color)?;
    Ok(())
}
