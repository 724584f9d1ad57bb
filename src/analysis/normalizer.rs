//! Word normalization.
//!
//! Normalization turns a raw whitespace-delimited word into the canonical
//! term used as an index key: lowercased, with leading and trailing
//! punctuation and whitespace trimmed away. Words without a single
//! alphabetic character are not terms at all.
//!
//! # Examples
//!
//! ```
//! use quern::analysis::normalize;
//!
//! assert_eq!(normalize("Hello!!"), Some("hello".to_string()));
//! assert_eq!(normalize("don't"), Some("don't".to_string()));
//! assert_eq!(normalize("!!!"), None);
//! ```

use crate::types::Term;

/// Normalize a raw word into a canonical index term.
///
/// The word is lowercased, then a maximal run of whitespace and ASCII
/// punctuation is stripped from each end. Interior punctuation is kept,
/// so `don't` survives intact. Returns `None` when the word contains no
/// alphabetic character or nothing remains after trimming; callers must
/// discard such words.
///
/// Pure function; never fails.
pub fn normalize(word: &str) -> Option<Term> {
    if !word.chars().any(char::is_alphabetic) {
        return None;
    }

    let mut lowered = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_alphabetic() {
            lowered.extend(c.to_lowercase());
        } else {
            lowered.push(c);
        }
    }

    let trimmed = lowered.trim_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims_punctuation() {
        assert_eq!(normalize("Hello!!"), Some("hello".to_string()));
        assert_eq!(normalize("...Cats..."), Some("cats".to_string()));
        assert_eq!(normalize("WORLD"), Some("world".to_string()));
    }

    #[test]
    fn test_rejects_words_without_letters() {
        assert_eq!(normalize("!!!"), None);
        assert_eq!(normalize("12345"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("+-/="), None);
    }

    #[test]
    fn test_preserves_interior_punctuation() {
        assert_eq!(normalize("don't"), Some("don't".to_string()));
        assert_eq!(normalize("e-mail"), Some("e-mail".to_string()));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  Tab\t"), Some("tab".to_string()));
    }

    #[test]
    fn test_keeps_interior_digits() {
        // Digits are neither punctuation nor whitespace, so they are only
        // rejected when the word has no letters at all.
        assert_eq!(normalize("abc123"), Some("abc123".to_string()));
        assert_eq!(normalize("R2D2"), Some("r2d2".to_string()));
    }
}
