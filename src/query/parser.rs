//! Query line parsing.

use crate::analysis::normalize;
use crate::query::{Occur, QueryTerm};

/// Parse a query line into sign-tagged terms, preserving word order.
///
/// Each whitespace-separated word may carry exactly one leading `+`
/// (must match) or `-` (must not match); the sign is stripped before the
/// remainder is normalized. Unsigned words are plain `Should` terms.
///
/// A word whose remainder does not normalize to a term — `+!!!`, a bare
/// `-`, a run of digits — is skipped entirely and contributes nothing to
/// evaluation.
pub fn parse_query(line: &str) -> Vec<QueryTerm> {
    let mut terms = Vec::new();
    for word in line.split_whitespace() {
        let (occur, rest) = if let Some(rest) = word.strip_prefix('+') {
            (Occur::Must, rest)
        } else if let Some(rest) = word.strip_prefix('-') {
            (Occur::MustNot, rest)
        } else {
            (Occur::Should, word)
        };

        if let Some(term) = normalize(rest) {
            terms.push(QueryTerm::new(term, occur));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_terms() {
        let terms = parse_query("cats dogs");
        assert_eq!(
            terms,
            vec![
                QueryTerm::new("cats", Occur::Should),
                QueryTerm::new("dogs", Occur::Should),
            ]
        );
    }

    #[test]
    fn test_parse_signed_terms() {
        let terms = parse_query("dogs +cats -birds");
        assert_eq!(
            terms,
            vec![
                QueryTerm::new("dogs", Occur::Should),
                QueryTerm::new("cats", Occur::Must),
                QueryTerm::new("birds", Occur::MustNot),
            ]
        );
    }

    #[test]
    fn test_parse_normalizes_terms() {
        let terms = parse_query("+CATS! -Dogs.");
        assert_eq!(
            terms,
            vec![
                QueryTerm::new("cats", Occur::Must),
                QueryTerm::new("dogs", Occur::MustNot),
            ]
        );
    }

    #[test]
    fn test_parse_skips_empty_normalizations() {
        assert!(parse_query("+!!!").is_empty());
        assert!(parse_query("- + 123").is_empty());
        assert_eq!(parse_query("+!!! cats").len(), 1);
    }

    #[test]
    fn test_parse_only_strips_one_sign_character() {
        // The second '-' is leading punctuation, trimmed by normalization.
        let terms = parse_query("--cats");
        assert_eq!(terms, vec![QueryTerm::new("cats", Occur::MustNot)]);
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("   \t ").is_empty());
    }
}
