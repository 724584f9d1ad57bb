//! Boolean query parsing and evaluation.

pub mod evaluator;
pub mod parser;

use crate::types::Term;

// Re-export for convenient access
pub use evaluator::evaluate;
pub use parser::parse_query;

/// Occurrence requirement for a query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    /// Plain term: its matches extend the running result (union).
    Should,
    /// `+` term: the result must also match it (intersection).
    Must,
    /// `-` term: its matches are removed from the result (difference).
    MustNot,
}

/// A sign-tagged term extracted from a query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    /// The canonical term to look up.
    pub term: Term,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl QueryTerm {
    /// Create a new query term.
    pub fn new<S: Into<Term>>(term: S, occur: Occur) -> Self {
        QueryTerm {
            term: term.into(),
            occur,
        }
    }
}
