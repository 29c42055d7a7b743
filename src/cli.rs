// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::core::analyzer::analyze_file;
use crate::core::ranker::{DEFAULT_TOP_WORDS, top_words};
use crate::report::write_report;

/// Printed when the arguments do not name exactly one file.
pub const USAGE: &str = "Usage: file-analyzer <filename>";

/// The single argument is always a path, even `-x` or `--help`, so clap's
/// own help and version flags are turned off.
#[derive(Parser, Debug)]
#[command(
    name = "file-analyzer",
    author,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Text file to analyze
    #[arg(allow_hyphen_values = true)]
    pub file: PathBuf,
}

/// Analyzes `args.file` and prints the report to standard output.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or read
/// * Standard output cannot be written
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_to(&args, &mut handle)
}

/// Analyzes `args.file` and writes the report to `out`.
///
/// Nothing is written unless the whole file was read successfully.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or read
/// * Writing to `out` fails
#[inline]
pub fn run_to<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let stats = analyze_file(&args.file)?;
    let top = top_words(&stats.word_frequency, DEFAULT_TOP_WORDS);

    write_report(out, &args.file.display().to_string(), &stats, &top)
        .and_then(|()| out.flush())
        .context("Failed to write report")?;

    Ok(())
}
