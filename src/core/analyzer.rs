// src/core/analyzer.rs
use anyhow::{Context as _, Result};
use log::{debug, trace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::normalizer::normalize;
use crate::models::FileStatistics;

/// Analyzes the file at `path` in a single pass.
///
/// The file handle lives only for the duration of this call and is closed on
/// every exit path, including errors.
///
/// # Arguments
///
/// * `path` - The file to analyze
///
/// # Returns
///
/// * `Ok(FileStatistics)` - Character, word and line counts plus word frequencies
///
/// # Errors
///
/// This function may return an error if:
/// * The path does not exist or cannot be opened for reading
/// * Reading fails part way through (this includes `path` being a directory)
#[inline]
pub fn analyze_file(path: &Path) -> Result<FileStatistics> {
    debug!("Analyzing {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let stats = analyze_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    debug!(
        "Finished {}: {} lines, {} words, {} distinct",
        path.display(),
        stats.line_count,
        stats.word_count,
        stats.distinct_words()
    );
    Ok(stats)
}

/// Runs the line-by-line analysis over any buffered reader.
///
/// Lines are split on `\n` with one trailing `\r` removed. A final line
/// without a terminator still counts, and a trailing `\n` does not produce
/// an extra empty line. Bytes that are not valid UTF-8 are counted towards
/// the character total but never form part of a word.
///
/// # Errors
///
/// Returns the underlying I/O error if the reader fails.
#[inline]
pub fn analyze_reader<R: BufRead>(mut reader: R) -> io::Result<FileStatistics> {
    let mut stats = FileStatistics::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = strip_line_ending(&buf);
        record_line(&mut stats, &String::from_utf8_lossy(line), line.len());
    }

    Ok(stats)
}

fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn record_line(stats: &mut FileStatistics, line: &str, byte_len: usize) {
    stats.line_count = stats.line_count.saturating_add(1);
    // +1 for the newline, whether or not the file actually has one here
    stats.character_count = stats
        .character_count
        .saturating_add(byte_len.saturating_add(1));

    let mut words_in_line: usize = 0;
    for token in line.split_whitespace() {
        words_in_line = words_in_line.saturating_add(1);

        let word = normalize(token);
        if !word.is_empty() {
            let count = stats.word_frequency.entry(word).or_insert(0);
            *count = count.saturating_add(1);
        }
    }
    stats.word_count = stats.word_count.saturating_add(words_in_line);

    trace!("line {}: {} words", stats.line_count, words_in_line);
}
