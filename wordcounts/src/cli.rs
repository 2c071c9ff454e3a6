// src/cli.rs
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::aggregator::count_file;
use crate::models::FrequencyMode;
use crate::utils::{USAGE, render_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the text file to analyze
    pub filename: Option<PathBuf>,

    /// Number of top occurring words to display (0 or less lists every word alphabetically)
    #[arg(short = 'n', long, default_value_t = 5, allow_negative_numbers = true)]
    pub number: i64,
}

fn is_missing(path: &Path) -> bool {
    matches!(fs::metadata(path), Err(err) if err.kind() == ErrorKind::NotFound)
}

/// Runs one analysis and writes the report, or a single error line, to `out`.
///
/// # Errors
///
/// Only failures to write to `out` are returned. A missing or unreadable
/// input file is reported on `out` and counts as a clean run.
#[inline]
pub fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let Some(filename) = args.filename else {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    };

    if is_missing(&filename) {
        debug!(path = %filename.display(), "input file not found");
        writeln!(out, "Error: File '{}' not found.", filename.display())?;
        return Ok(());
    }

    let stats = match count_file(&filename) {
        Ok(stats) => stats,
        Err(err) => {
            debug!(path = %filename.display(), error = %format!("{err:#}"), "failed to process file");
            writeln!(out, "Error processing file: {err:#}")?;
            return Ok(());
        }
    };

    let mode = FrequencyMode::from_limit(args.number);
    debug!(?mode, "rendering report");
    for line in render_report(&stats, mode) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(())
}

/// Parses a raw command line and runs it, writing everything to `out`.
///
/// `--help` and `--version` print clap's text. Any other malformed command
/// line prints the usage line and counts as a clean run.
///
/// # Errors
///
/// Only failures to write to `out` are returned.
#[inline]
pub fn run_from_args<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match Args::try_parse_from(args) {
        Ok(args) => run_with_output(args, out),
        Err(err)
            if matches!(
                err.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            write!(out, "{}", err.render())?;
            Ok(())
        }
        Err(err) => {
            debug!(error = %err, "rejected command line");
            writeln!(out, "{USAGE}")?;
            Ok(())
        }
    }
}

/// Runs one analysis, printing to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written to.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)
}
