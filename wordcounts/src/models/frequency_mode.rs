// src/models/frequency_mode.rs
use std::num::NonZeroUsize;

/// How the word-frequency section of a report is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyMode {
    /// The `n` most frequent words, count descending then word ascending.
    Top(NonZeroUsize),
    /// Every word, sorted by word only.
    Alphabetical,
}

impl FrequencyMode {
    /// Maps the `-n` value onto a mode. Anything `<= 0` lists alphabetically.
    #[inline]
    #[must_use]
    pub fn from_limit(limit: i64) -> Self {
        if limit <= 0 {
            return Self::Alphabetical;
        }
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        NonZeroUsize::new(limit).map_or(Self::Alphabetical, Self::Top)
    }
}
