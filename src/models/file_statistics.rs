// src/models/file_statistics.rs

use std::collections::HashMap;

/// Aggregate counts collected in a single pass over one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileStatistics {
    /// Bytes of line content plus one per line for the assumed newline.
    pub character_count: usize,
    pub word_count: usize,
    pub line_count: usize,
    /// Normalized word to occurrence count. Never holds an empty key.
    pub word_frequency: HashMap<String, usize>,
}

impl FileStatistics {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            character_count: 0,
            word_count: 0,
            line_count: 0,
            word_frequency: HashMap::new(),
        }
    }

    /// Sum of all frequency values, i.e. the number of words that survived
    /// normalization. Always `<= word_count`.
    #[inline]
    #[must_use]
    pub fn frequency_total(&self) -> usize {
        self.word_frequency
            .values()
            .fold(0_usize, |acc, count| acc.saturating_add(*count))
    }

    #[inline]
    #[must_use]
    pub fn distinct_words(&self) -> usize {
        self.word_frequency.len()
    }
}
