//! Message tokenizer with stop-word removal.
//!
//! Normalizes raw input into the word sequence the scorer consumes:
//! lowercase, split on single spaces, strip everything that is not an ASCII
//! letter or digit, then drop empty fragments and stop words. Word order is
//! preserved and duplicates are retained — each occurrence contributes a
//! score term.

use crate::stopwords::StopWordSet;

/// Tokenizes `text` into normalized words, dropping stop words.
///
/// Splitting is on single space characters only: consecutive spaces produce
/// empty fragments (dropped after stripping), and tabs or newlines are not
/// separators — their fragments merge once the non-alphanumeric bytes are
/// stripped. Non-ASCII characters are stripped like punctuation.
pub fn tokenize(text: &str, stopwords: &StopWordSet) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    for fragment in lowered.split(' ') {
        let word: String = fragment
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        if word.is_empty() || stopwords.contains(&word) {
            continue;
        }
        tokens.push(word);
    }
    tokens
}
