//! Whitespace tokenization into deduplicated term sets.

use std::collections::BTreeSet;

use crate::analysis::normalizer::normalize;
use crate::types::Term;

/// Tokenize free text into the set of canonical terms it contains.
///
/// Splits on runs of whitespace, normalizes each word, and discards words
/// that do not normalize to a term. The set deduplicates automatically;
/// callers must not rely on any particular order.
///
/// # Examples
///
/// ```
/// use quern::analysis::tokenize;
///
/// let tokens = tokenize("The cat sat, the cat ran.");
/// assert_eq!(tokens.len(), 4);
/// assert!(tokens.contains("cat"));
/// ```
pub fn tokenize(text: &str) -> BTreeSet<Term> {
    text.split_whitespace().filter_map(normalize).collect()
}
