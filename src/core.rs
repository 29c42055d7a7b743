// src/core.rs
pub mod analyzer;
pub mod normalizer;
pub mod ranker;
