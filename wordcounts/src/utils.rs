// src/utils.rs
use crate::core::ranker::rank;
use crate::models::{FrequencyMode, TextStats};

pub const USAGE: &str = "Usage: wordcounts <filename> [-n number]";

/// Builds every line of the statistics report before anything is printed.
#[must_use]
pub fn render_report(stats: &TextStats, mode: FrequencyMode) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Total word count (including repeated words): {}",
            stats.total_words
        ),
        format!("Total number of distinct words: {}", stats.distinct_words),
        format!(
            "Total number of characters (including spaces): {}",
            stats.chars_with_spaces
        ),
        format!(
            "Total number of characters (excluding spaces): {}",
            stats.chars_without_spaces
        ),
    ];

    lines.push(match mode {
        FrequencyMode::Top(n) => format!("Top {n} word frequencies:"),
        FrequencyMode::Alphabetical => String::from("Word frequencies (sorted alphabetically):"),
    });
    lines.extend(
        rank(&stats.word_counts, mode)
            .iter()
            .map(|entry| format!("    {entry}")),
    );

    lines
}
