//! Global configuration constants for subscout.
//!
//! These describe the shipped corpus snapshot and are compile-time defaults;
//! a caller supplying its own snapshot passes its own totals via
//! [`crate::corpus::CorpusConstants`].

/// Number of distinct word types across the shipped corpus snapshot.
///
/// Used as the additive smoothing term in every category's score
/// denominator. Fixed for a given snapshot.
pub const DEFAULT_VOCABULARY_SIZE: u64 = 959_198;

/// Total number of sampled documents across all categories in the shipped
/// corpus snapshot.
///
/// Together with each category's own document count this forms the prior
/// term of the category score. Fixed for a given snapshot.
pub const DEFAULT_TOTAL_DOC_COUNT: u64 = 3_490_408;
