// tests/integration_tests/ranking_test.rs
use super::common::setup_sample_file;
use anyhow::Result;
use file_analyzer::{DEFAULT_TOP_WORDS, WordCount, analyze_file, top_words};

#[test]
fn test_ranking_sample_file() -> Result<()> {
    let (_temp_dir, path) = setup_sample_file()?;
    let stats = analyze_file(&path)?;

    let top = top_words(&stats.word_frequency, DEFAULT_TOP_WORDS);

    assert_eq!(top.len(), DEFAULT_TOP_WORDS.min(stats.distinct_words()));
    assert_eq!(top.first(), Some(&WordCount::new("test", 4)));
    assert!(
        top.windows(2).all(|pair| pair[0].count >= pair[1].count),
        "Ranking should be non-increasing"
    );
    // every other word occurs once, so the rest are alphabetical
    let rest: Vec<&str> = top.iter().skip(1).map(|wc| wc.word.as_str()).collect();
    assert_eq!(
        rest,
        ["a", "and", "file", "has", "hello", "is", "it", "lines", "repeated"]
    );
    Ok(())
}
