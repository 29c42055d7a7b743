// tests/integration_tests/analyzing_test.rs
use super::common::{SAMPLE_CONTENT, create_test_file, setup_sample_file};
use anyhow::Result;
use file_analyzer::analyze_file;
use std::io;
use tempfile::TempDir;

#[test]
fn test_sample_file_counts() -> Result<()> {
    let (_temp_dir, path) = setup_sample_file()?;

    let stats = analyze_file(&path)?;

    assert_eq!(stats.line_count, 4, "Sample has 4 lines");
    assert_eq!(stats.word_count, 18, "Sample has 18 words");
    assert_eq!(stats.character_count, SAMPLE_CONTENT.len() + 1);
    assert_eq!(stats.word_frequency.get("test").copied(), Some(4));
    assert!(
        stats.frequency_total() <= stats.word_count,
        "Frequencies never exceed the raw word count"
    );
    Ok(())
}

#[test]
fn test_every_word_survives_normalization() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = create_test_file(
        temp_dir.path(),
        "words.txt",
        "Rust rust RUST!\nfast, safe; fun\n",
    )?;

    let stats = analyze_file(&path)?;

    assert_eq!(stats.frequency_total(), stats.word_count);
    assert_eq!(stats.word_frequency.get("rust").copied(), Some(3));
    assert_eq!(stats.distinct_words(), 4);
    Ok(())
}

#[test]
fn test_errors_are_io_errors() -> Result<()> {
    let temp_dir = TempDir::new()?;

    for path in [temp_dir.path().join("nonexistent.txt"), temp_dir.path().to_path_buf()] {
        let err = analyze_file(&path).expect_err("Should fail to analyze");
        assert!(
            err.chain().any(|cause| cause.is::<io::Error>()),
            "{} should fail with an io::Error, got {err:#}",
            path.display()
        );
    }
    Ok(())
}
