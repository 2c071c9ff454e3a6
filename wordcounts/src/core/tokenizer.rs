// src/core/tokenizer.rs
use std::str::Chars;

/// Letters, digits and underscore.
#[inline]
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Simple lowercase mapping: one scalar in, one scalar out.
///
/// Only the first scalar of the full mapping is kept, so `'İ'` folds to
/// `'i'` rather than `"i\u{307}"`.
#[inline]
#[must_use]
pub fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Between,
    InWord,
}

/// Iterator over the case-folded words of a single line.
///
/// A word is a maximal run of [`is_word_char`] characters, so
/// `"Hello, hello!"` yields `"hello"` twice and `"__"` or `"42"` are words.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    chars: Chars<'a>,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut state = ScanState::Between;
        let mut word = String::new();

        for c in self.chars.by_ref() {
            let c = fold_case(c);
            match (state, is_word_char(c)) {
                (_, true) => {
                    state = ScanState::InWord;
                    word.push(c);
                }
                (ScanState::InWord, false) => return Some(word),
                (ScanState::Between, false) => {}
            }
        }

        (state == ScanState::InWord).then_some(word)
    }
}

/// Splits `line` into case-folded words.
#[inline]
#[must_use]
pub fn words(line: &str) -> Words<'_> {
    Words {
        chars: line.chars(),
    }
}
