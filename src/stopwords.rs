//! Stop-word set for tokenization.
//!
//! Stop words are high-frequency, low-signal words ("the", "and", ...) that
//! are dropped before scoring. The set is built once at startup from a
//! newline-separated word list and is read-only afterwards; membership tests
//! are O(1).

use std::collections::HashSet;

/// An immutable set of lowercase stop words.
///
/// Words are stored lowercase; tokens are compared after case-folding, so
/// lookups never allocate.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Creates an empty set (nothing is filtered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a newline-separated word list, one word per line.
    ///
    /// Lines are trimmed of surrounding ASCII whitespace (tolerates CRLF
    /// line endings) and blank lines are skipped.
    pub fn from_newline_text(text: &str) -> Self {
        Self::from_words(text.lines().map(str::trim).filter(|w| !w.is_empty()))
    }

    /// Builds a set from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Returns `true` if `word` is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of stop words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
