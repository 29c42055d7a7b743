// src/models/word_count.rs

/// A single ranked entry: a normalized word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    #[inline]
    #[must_use]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
