//! Corpus types for the classifier.
//!
//! A [`Corpus`] maps category names to pre-aggregated word-frequency
//! statistics ([`CategoryStats`]), built once at startup from a JSON snapshot
//! and read-only during request handling. Category iteration order is the
//! insertion order of the snapshot — score ties are broken by it, so it must
//! be deterministic.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use thiserror::Error;

use crate::config;

/// Validation and parsing failures for corpus inputs.
///
/// These surface at startup, before the service accepts traffic. The
/// per-request classify path never returns an error.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus has no categories.
    #[error("corpus has no categories")]
    Empty,
    /// A category claims zero sampled documents.
    #[error("category '{0}' has doc_count = 0")]
    ZeroDocCount(String),
    /// The vocabulary size constant is zero.
    #[error("vocabulary_size must be positive")]
    ZeroVocabulary,
    /// The total document count constant is zero.
    #[error("total_doc_count must be positive")]
    ZeroTotalDocs,
    /// The snapshot text is not valid JSON of the expected shape.
    #[error("failed to parse corpus snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Pre-aggregated word statistics for one category.
///
/// `word_count` may exceed the sum of `word_freqs` values: words below a
/// snapshot-internal frequency threshold were pruned upstream but still
/// count toward the total. Scoring uses both fields as given and never
/// assumes they reconcile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Total word occurrences across this category's sampled documents.
    pub word_count: u64,
    /// Number of documents sampled for this category.
    pub doc_count: u64,
    /// Occurrence count per retained word. Keys exist only for words
    /// observed at least once.
    pub word_freqs: HashMap<String, u64>,
}

/// Corpus-wide totals, fixed per corpus snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CorpusConstants {
    /// Distinct word types across the entire corpus; the additive smoothing
    /// term in every score denominator.
    pub vocabulary_size: u64,
    /// Total sampled documents across all categories; numerator of the
    /// category prior.
    pub total_doc_count: u64,
}

impl CorpusConstants {
    /// Creates constants for a caller-supplied snapshot.
    pub fn new(vocabulary_size: u64, total_doc_count: u64) -> Self {
        Self {
            vocabulary_size,
            total_doc_count,
        }
    }

    /// Checks that both totals are positive.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.vocabulary_size == 0 {
            return Err(CorpusError::ZeroVocabulary);
        }
        if self.total_doc_count == 0 {
            return Err(CorpusError::ZeroTotalDocs);
        }
        Ok(())
    }
}

impl Default for CorpusConstants {
    /// Totals of the shipped corpus snapshot (see [`crate::config`]).
    fn default() -> Self {
        Self {
            vocabulary_size: config::DEFAULT_VOCABULARY_SIZE,
            total_doc_count: config::DEFAULT_TOTAL_DOC_COUNT,
        }
    }
}

/// Insertion-ordered mapping from category name to [`CategoryStats`].
///
/// Iteration follows insertion order (the document order of the snapshot),
/// which makes the classifier's first-wins tie-break reproducible. Built
/// once at startup; immutable during request handling.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<(String, CategoryStats)>,
    by_name: HashMap<String, usize>,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON snapshot: an object mapping category name to stats,
    /// e.g. `{"rust": {"word_count": 10, "doc_count": 5, "word_freqs": {"borrow": 3}}}`.
    ///
    /// Document order becomes insertion order.
    pub fn from_json_str(text: &str) -> Result<Self, CorpusError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Inserts a category. Re-inserting an existing name replaces its stats
    /// in place without changing the entry's position.
    pub fn insert(&mut self, name: impl Into<String>, stats: CategoryStats) {
        let name = name.into();
        match self.by_name.get(&name) {
            Some(&idx) => self.entries[idx].1 = stats,
            None => {
                self.by_name.insert(name.clone(), self.entries.len());
                self.entries.push((name, stats));
            }
        }
    }

    /// Looks up a category's stats by name.
    pub fn get(&self, name: &str) -> Option<&CategoryStats> {
        self.by_name.get(name).map(|&idx| &self.entries[idx].1)
    }

    /// Iterates categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the corpus has no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks the startup invariants: at least one category, and every
    /// category sampled from at least one document.
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.entries.is_empty() {
            return Err(CorpusError::Empty);
        }
        for (name, stats) in self.iter() {
            if stats.doc_count == 0 {
                return Err(CorpusError::ZeroDocCount(name.to_string()));
            }
        }
        Ok(())
    }
}

impl Serialize for Corpus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, stats) in self.iter() {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Corpus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CorpusVisitor;

        impl<'de> Visitor<'de> for CorpusVisitor {
            type Value = Corpus;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of category name to category stats")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Corpus, A::Error> {
                let mut corpus = Corpus::new();
                while let Some((name, stats)) = map.next_entry::<String, CategoryStats>()? {
                    corpus.insert(name, stats);
                }
                Ok(corpus)
            }
        }

        deserializer.deserialize_map(CorpusVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(word_count: u64, doc_count: u64, freqs: &[(&str, u64)]) -> CategoryStats {
        CategoryStats {
            word_count,
            doc_count,
            word_freqs: freqs.iter().map(|&(w, n)| (w.to_string(), n)).collect(),
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut corpus = Corpus::new();
        corpus.insert("zebra", stats(1, 1, &[]));
        corpus.insert("apple", stats(1, 1, &[]));
        corpus.insert("mango", stats(1, 1, &[]));
        let names: Vec<&str> = corpus.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut corpus = Corpus::new();
        corpus.insert("a", stats(1, 1, &[]));
        corpus.insert("b", stats(2, 2, &[]));
        corpus.insert("a", stats(9, 9, &[]));
        let names: Vec<&str> = corpus.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(corpus.get("a").unwrap().word_count, 9);
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_from_json_str_preserves_document_order() {
        let json = r#"{
            "movies": {"word_count": 40, "doc_count": 4, "word_freqs": {"film": 7}},
            "aww":    {"word_count": 20, "doc_count": 2, "word_freqs": {"cat": 5}}
        }"#;
        let corpus = Corpus::from_json_str(json).unwrap();
        let names: Vec<&str> = corpus.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["movies", "aww"]);
        assert_eq!(corpus.get("aww").unwrap().word_freqs["cat"], 5);
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        assert!(matches!(
            Corpus::from_json_str("not json"),
            Err(CorpusError::Parse(_))
        ));
        // wrong shape: stats record missing fields
        assert!(Corpus::from_json_str(r#"{"aww": {"word_count": 1}}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut corpus = Corpus::new();
        corpus.insert("b", stats(3, 1, &[("dog", 2)]));
        corpus.insert("a", stats(4, 2, &[]));
        let json = serde_json::to_string(&corpus).unwrap();
        let back = Corpus::from_json_str(&json).unwrap();
        let names: Vec<&str> = back.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(back.get("b").unwrap().word_freqs["dog"], 2);
    }

    #[test]
    fn test_validate_empty_corpus() {
        assert!(matches!(Corpus::new().validate(), Err(CorpusError::Empty)));
    }

    #[test]
    fn test_validate_zero_doc_count() {
        let mut corpus = Corpus::new();
        corpus.insert("ok", stats(1, 1, &[]));
        corpus.insert("broken", stats(1, 0, &[]));
        match corpus.validate() {
            Err(CorpusError::ZeroDocCount(name)) => assert_eq!(name, "broken"),
            other => panic!("expected ZeroDocCount, got {other:?}"),
        }
    }

    #[test]
    fn test_constants_validate() {
        assert!(CorpusConstants::new(100, 10).validate().is_ok());
        assert!(matches!(
            CorpusConstants::new(0, 10).validate(),
            Err(CorpusError::ZeroVocabulary)
        ));
        assert!(matches!(
            CorpusConstants::new(100, 0).validate(),
            Err(CorpusError::ZeroTotalDocs)
        ));
    }

    #[test]
    fn test_default_constants_match_shipped_snapshot() {
        let constants = CorpusConstants::default();
        assert_eq!(constants.vocabulary_size, config::DEFAULT_VOCABULARY_SIZE);
        assert_eq!(constants.total_doc_count, config::DEFAULT_TOTAL_DOC_COUNT);
        assert!(constants.validate().is_ok());
    }
}
