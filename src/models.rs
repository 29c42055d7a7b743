// src/models.rs
mod file_statistics;
mod word_count;

pub use file_statistics::FileStatistics;
pub use word_count::WordCount;
