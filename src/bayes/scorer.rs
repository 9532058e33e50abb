//! Naive Bayes category scoring.
//!
//! Scores every category in the corpus against a token sequence and returns
//! the best match. Scores are unnormalized log-scores: per token,
//! `ln(freq)` for words retained in the category (unseen words carry a
//! pseudo-count of 1, so they add `ln(1) = 0`), minus
//! `ln(word_count + vocabulary_size)` always, plus the
//! `ln(total_doc_count) − ln(doc_count)` prior term. The pseudo-count is
//! applied to the numerator only — the denominator adds the full vocabulary
//! size either way — and that asymmetry is part of the scoring contract.

use crate::corpus::{CategoryStats, Corpus, CorpusConstants};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Outcome of classifying one token sequence.
///
/// `NoSignal` is a distinct result, not an error: the caller decides the
/// user-facing handling of "nothing to classify".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// The best-scoring category.
    Category(&'a str),
    /// No usable tokens (or no categories to score against).
    NoSignal,
}

/// A category with its log-score, as returned by [`rank`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCategory<'a> {
    /// The category name (borrowed from the corpus).
    pub category: &'a str,
    /// Unnormalized log-score; only relative ordering is meaningful.
    pub score: f64,
}

/// Log-score of one category for the given tokens.
fn category_score(tokens: &[String], stats: &CategoryStats, constants: &CorpusConstants) -> f64 {
    let denominator = (stats.word_count as f64 + constants.vocabulary_size as f64).ln();
    let mut score = 0.0;
    for token in tokens {
        if let Some(&freq) = stats.word_freqs.get(token) {
            score += (freq as f64).ln();
        }
        // unseen words use a pseudo-count of 1: ln(1) = 0 in the numerator,
        // but the full vocabulary-smoothed denominator still applies
        score -= denominator;
    }
    score + (constants.total_doc_count as f64).ln() - (stats.doc_count as f64).ln()
}

/// Picks the best-scoring category for `tokens`, in corpus insertion order.
///
/// Empty `tokens` (or an empty corpus) yields [`Classification::NoSignal`].
/// Comparison is strict `>`, so on a score tie the first-inserted category
/// wins — deterministically, because corpus iteration order is insertion
/// order.
pub fn classify<'c>(
    tokens: &[String],
    corpus: &'c Corpus,
    constants: &CorpusConstants,
) -> Classification<'c> {
    if tokens.is_empty() {
        return Classification::NoSignal;
    }

    let mut top_score = f64::NEG_INFINITY;
    let mut top_category = None;
    for (name, stats) in corpus.iter() {
        let score = category_score(tokens, stats, constants);
        if score > top_score {
            top_score = score;
            top_category = Some(name);
        }
    }

    match top_category {
        Some(name) => Classification::Category(name),
        None => Classification::NoSignal,
    }
}

/// Returns the `k` best-scoring categories for `tokens`, best first.
///
/// Score ties are broken by corpus insertion order, matching [`classify`].
/// Empty `tokens` or `k == 0` yields an empty vec.
pub fn rank<'c>(
    tokens: &[String],
    corpus: &'c Corpus,
    constants: &CorpusConstants,
    k: usize,
) -> Vec<ScoredCategory<'c>> {
    if tokens.is_empty() || k == 0 {
        return Vec::new();
    }

    // Partial sort: O(n log k) via min-heap of size k. Reverse(idx) makes
    // the heap evict later-inserted categories first on score ties.
    let mut names = Vec::with_capacity(corpus.len());
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, Reverse<usize>)>> =
        BinaryHeap::with_capacity(k + 1);
    for (idx, (name, stats)) in corpus.iter().enumerate() {
        names.push(name);
        let score = category_score(tokens, stats, constants);
        heap.push(Reverse((OrderedFloat(score), Reverse(idx))));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut results: Vec<(usize, f64)> = heap
        .into_iter()
        .map(|Reverse((score, Reverse(idx)))| (idx, score.0))
        .collect();
    results.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    results
        .into_iter()
        .map(|(idx, score)| ScoredCategory {
            category: names[idx],
            score,
        })
        .collect()
}
