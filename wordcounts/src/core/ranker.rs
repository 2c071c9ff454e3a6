// src/core/ranker.rs
use std::collections::HashMap;

use crate::models::{FrequencyMode, RankedEntry};

fn entries(word_counts: &HashMap<String, u64>) -> Vec<RankedEntry> {
    word_counts
        .iter()
        .map(|(word, &count)| RankedEntry::new(word.as_str(), count))
        .collect()
}

/// Returns the `n` most frequent words, count descending with ties broken
/// alphabetically. Fewer than `n` distinct words yields all of them.
#[inline]
#[must_use]
pub fn top_n(word_counts: &HashMap<String, u64>, n: usize) -> Vec<RankedEntry> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked = entries(word_counts);
    if n < ranked.len() {
        ranked.select_nth_unstable(n);
        ranked.truncate(n);
    }
    ranked.sort_unstable();
    ranked
}

/// Returns every word sorted alphabetically, ignoring counts.
#[inline]
#[must_use]
pub fn alphabetical(word_counts: &HashMap<String, u64>) -> Vec<RankedEntry> {
    let mut listed = entries(word_counts);
    listed.sort_unstable_by(|a, b| a.word.cmp(&b.word));
    listed
}

/// Lists `word_counts` the way `mode` asks for.
#[inline]
#[must_use]
pub fn rank(word_counts: &HashMap<String, u64>, mode: FrequencyMode) -> Vec<RankedEntry> {
    match mode {
        FrequencyMode::Top(n) => top_n(word_counts, n.get()),
        FrequencyMode::Alphabetical => alphabetical(word_counts),
    }
}
