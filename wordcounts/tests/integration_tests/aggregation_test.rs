// tests/integration_tests/aggregation_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use wordcounts::count_file;

#[test]
fn test_single_line_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = count_file(&temp_dir.path().join("cat.txt"))?;

    assert_eq!(stats.total_words, 6);
    assert_eq!(stats.distinct_words, 5);
    assert_eq!(stats.chars_with_spaces, 22);
    assert_eq!(stats.chars_without_spaces, 17);
    Ok(())
}

#[test]
fn test_case_insensitive_counting() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = count_file(&temp_dir.path().join("hello.txt"))?;

    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.distinct_words, 1);
    assert_eq!(stats.word_counts.get("hello"), Some(&3));
    Ok(())
}

#[test]
fn test_empty_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = count_file(&temp_dir.path().join("empty.txt"))?;

    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.distinct_words, 0);
    assert_eq!(stats.chars_with_spaces, 0);
    assert_eq!(stats.chars_without_spaces, 0);
    assert!(stats.word_counts.is_empty());
    Ok(())
}

#[test]
fn test_multi_line_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let stats = count_file(&temp_dir.path().join("poem.txt"))?;

    assert_eq!(stats.total_words, 16);
    assert_eq!(stats.word_counts.get("fish"), Some(&8));
    assert_eq!(stats.word_counts.get("blue"), Some(&2));
    assert_eq!(stats.distinct_words, 8);
    Ok(())
}

#[test]
fn test_invalid_utf8_file_fails_without_stats() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let err = count_file(&temp_dir.path().join("binary.dat"))
        .expect_err("invalid UTF-8 should fail");

    assert!(format!("{err:#}").starts_with("error reading file: "));
    Ok(())
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("poem.txt");

    assert_eq!(count_file(&path)?, count_file(&path)?);
    Ok(())
}
