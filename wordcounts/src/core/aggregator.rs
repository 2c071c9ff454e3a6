// src/core/aggregator.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::core::tokenizer::words;
use crate::models::TextStats;

/// Collects word and character statistics from a buffered text source.
///
/// The source is consumed once, line by line. Line separators (`\n`, or
/// `\r\n`) are not counted as characters.
///
/// # Errors
///
/// Returns an error if a line cannot be read or is not valid UTF-8. No
/// partial statistics are returned in that case.
#[inline]
pub fn aggregate<R: BufRead>(reader: R) -> Result<TextStats> {
    let mut stats = TextStats::new();
    let mut lines: u64 = 0;

    for line in reader.lines() {
        let line = line.context("error reading file")?;
        lines = lines.saturating_add(1);

        stats.record_line(&line);
        for word in words(&line) {
            stats.record_word(word);
        }
    }

    stats.finish();
    debug!(
        lines,
        total_words = stats.total_words,
        distinct_words = stats.distinct_words,
        "aggregated text"
    );
    Ok(stats)
}

/// Collects statistics for the file at `path`.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened
/// * A read fails part way through the file
/// * The file is not valid UTF-8 text
#[inline]
pub fn count_file(path: &Path) -> Result<TextStats> {
    debug!(path = %path.display(), "opening file");
    let file = File::open(path).context("error opening file")?;
    aggregate(BufReader::new(file))
}
