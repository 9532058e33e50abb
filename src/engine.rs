//! Startup assembly for the classifier.
//!
//! A [`Recommender`] owns the stop-word set, corpus, and corpus constants as
//! immutable values, validated once at construction. Construction is the
//! readiness gate: a service must not accept traffic unless it succeeded.
//! After that the request path is pure and lock-free, so one `Recommender`
//! is shared freely across handler threads or tasks.

use crate::bayes::{classify, rank, tokenize, Classification, ScoredCategory};
use crate::corpus::{Corpus, CorpusConstants, CorpusError};
use crate::stopwords::StopWordSet;

/// A validated, immutable classification engine.
#[derive(Debug, Clone)]
pub struct Recommender {
    stopwords: StopWordSet,
    corpus: Corpus,
    constants: CorpusConstants,
}

impl Recommender {
    /// Validates the inputs and assembles the engine.
    ///
    /// Fails on a degenerate configuration (no categories, a category with
    /// zero sampled documents, zero totals) so misconfiguration surfaces at
    /// startup instead of per-request.
    pub fn new(
        stopwords: StopWordSet,
        corpus: Corpus,
        constants: CorpusConstants,
    ) -> Result<Self, CorpusError> {
        corpus.validate()?;
        constants.validate()?;

        tracing::info!(
            categories = corpus.len(),
            stop_words = stopwords.len(),
            vocabulary_size = constants.vocabulary_size,
            total_doc_count = constants.total_doc_count,
            "classifier ready"
        );

        Ok(Self {
            stopwords,
            corpus,
            constants,
        })
    }

    /// Classifies a raw message: tokenize, then score every category.
    ///
    /// Returns [`Classification::NoSignal`] when nothing usable survives
    /// tokenization (empty input, punctuation only, or all stop words).
    pub fn suggest(&self, text: &str) -> Classification<'_> {
        let tokens = tokenize(text, &self.stopwords);
        let outcome = classify(&tokens, &self.corpus, &self.constants);
        tracing::debug!(tokens = tokens.len(), outcome = ?outcome, "classified message");
        outcome
    }

    /// Returns the `k` best-scoring categories for a raw message, best first.
    pub fn rank(&self, text: &str, k: usize) -> Vec<ScoredCategory<'_>> {
        let tokens = tokenize(text, &self.stopwords);
        rank(&tokens, &self.corpus, &self.constants, k)
    }

    /// The corpus this engine scores against.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The corpus-wide constants in use.
    pub fn constants(&self) -> &CorpusConstants {
        &self.constants
    }
}
