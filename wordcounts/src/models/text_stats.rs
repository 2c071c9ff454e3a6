// src/models/text_stats.rs
use std::collections::HashMap;

/// Aggregate counts collected in a single pass over a text source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextStats {
    pub total_words: u64,
    pub distinct_words: u64,
    pub chars_with_spaces: u64,
    pub chars_without_spaces: u64,
    /// Case-folded word to number of occurrences.
    pub word_counts: HashMap<String, u64>,
}

impl TextStats {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of an already case-folded word.
    #[inline]
    pub fn record_word(&mut self, word: String) {
        let count = self.word_counts.entry(word).or_insert(0);
        *count = count.saturating_add(1);
        self.total_words = self.total_words.saturating_add(1);
    }

    /// Adds the character totals of one line (line separator excluded).
    #[inline]
    pub fn record_line(&mut self, line: &str) {
        let (all, visible) = line.chars().fold((0_u64, 0_u64), |(all, visible), c| {
            (
                all.saturating_add(1),
                if c.is_whitespace() {
                    visible
                } else {
                    visible.saturating_add(1)
                },
            )
        });
        self.chars_with_spaces = self.chars_with_spaces.saturating_add(all);
        self.chars_without_spaces = self.chars_without_spaces.saturating_add(visible);
    }

    /// Settles `distinct_words` once every line has been recorded.
    #[inline]
    pub fn finish(&mut self) {
        self.distinct_words = u64::try_from(self.word_counts.len()).unwrap_or(u64::MAX);
    }
}
