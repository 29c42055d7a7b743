// src/report.rs
use std::io::{self, Write};

use crate::models::{FileStatistics, WordCount};

const TITLE: &str = "File Analysis for: ";

/// Writes the human-readable analysis report.
///
/// The title underline is as long as the title itself, counting the path in
/// bytes. Ranked words are left-justified in a 20-column field.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn write_report<W: Write>(
    out: &mut W,
    path: &str,
    stats: &FileStatistics,
    top: &[WordCount],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{TITLE}{path}")?;
    writeln!(out, "{}", "=".repeat(TITLE.len().saturating_add(path.len())))?;
    writeln!(out, "Number of Characters: {}", stats.character_count)?;
    writeln!(out, "Number of Words:      {}", stats.word_count)?;
    writeln!(out, "Number of Lines:      {}", stats.line_count)?;

    writeln!(out)?;
    writeln!(out, "Top 10 Most Frequent Words:")?;
    writeln!(out, "=========================")?;
    for (rank, entry) in (1_usize..).zip(top) {
        writeln!(out, "{rank:2}. {:<20} {}", entry.word, entry.count)?;
    }

    Ok(())
}
