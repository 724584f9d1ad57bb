//! Boolean set-algebra evaluation of parsed queries.

use crate::index::InvertedIndex;
use crate::query::{Occur, parse_query};
use crate::types::ResultSet;

/// Evaluate a query line against the index.
///
/// Terms combine strictly left to right against a running result set that
/// starts empty: `Should` terms union their postings in, `Must` terms
/// intersect, `MustNot` terms subtract. Ordering is load-bearing — a `+`
/// term before any plain term intersects against the empty base and pins
/// the result to empty for the rest of the query.
///
/// A term absent from the index behaves as the empty set; it is never an
/// error. Pure function of `index` and `line`, so re-evaluating the same
/// query against an unchanged index yields the same result.
pub fn evaluate(index: &InvertedIndex, line: &str) -> ResultSet {
    let mut results = ResultSet::new();

    for query_term in parse_query(line) {
        let postings = index.postings(&query_term.term);
        match query_term.occur {
            Occur::Should => {
                if let Some(set) = postings {
                    results.extend(set.iter().cloned());
                }
            }
            Occur::Must => match postings {
                Some(set) => results.retain(|doc| set.contains(doc)),
                None => results.clear(),
            },
            Occur::MustNot => {
                if let Some(set) = postings {
                    results.retain(|doc| !set.contains(doc));
                }
            }
        }
    }

    results
}
