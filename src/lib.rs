// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod report;

pub use cli::{Args, USAGE, run, run_to};
pub use crate::core::analyzer::{analyze_file, analyze_reader};
pub use crate::core::normalizer::normalize;
pub use crate::core::ranker::{DEFAULT_TOP_WORDS, top_words};
pub use models::{FileStatistics, WordCount};
pub use report::write_report;
