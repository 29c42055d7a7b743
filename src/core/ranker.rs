// src/core/ranker.rs
use std::collections::HashMap;

use crate::models::WordCount;

/// Number of words shown in the report.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Returns the `n` most frequent words, highest count first.
///
/// Words with equal counts are ordered alphabetically so the ranking is the
/// same on every run. If there are fewer than `n` distinct words, all of them
/// are returned; an empty table yields an empty list.
///
/// # Arguments
///
/// * `freq` - Normalized word to occurrence count
/// * `n` - Maximum number of entries to return
#[inline]
#[must_use]
pub fn top_words(freq: &HashMap<String, usize>, n: usize) -> Vec<WordCount> {
    let mut pairs: Vec<WordCount> = freq
        .iter()
        .map(|(word, count)| WordCount::new(word.as_str(), *count))
        .collect();

    pairs.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    pairs.truncate(n);
    pairs
}
