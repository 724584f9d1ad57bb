//! In-memory inverted index mapping terms to posting sets.
//!
//! The index is the central data structure of the crate: a sorted map from
//! canonical term to the set of documents containing it. It grows
//! monotonically — postings are only ever added, never removed — so
//! building from several corpora in turn accumulates their contents.
//!
//! # Examples
//!
//! ```
//! use quern::index::InvertedIndex;
//!
//! let mut index = InvertedIndex::new();
//! index.add_posting("cats".to_string(), "url1".to_string());
//! index.add_posting("cats".to_string(), "url2".to_string());
//!
//! assert_eq!(index.postings("cats").unwrap().len(), 2);
//! assert!(index.postings("dogs").is_none());
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::types::{DocumentId, Term};

/// A term → document-set mapping.
///
/// The caller owns the index and passes it `&mut` to the builder during
/// the write phase and `&` to the evaluator afterwards; the type itself
/// carries no interior mutability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvertedIndex {
    postings: BTreeMap<Term, BTreeSet<DocumentId>>,
}

impl InvertedIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Add a document to a term's posting set, creating the entry if the
    /// term has never been seen. Adding the same pair twice is a no-op.
    pub fn add_posting(&mut self, term: Term, doc: DocumentId) {
        self.postings.entry(term).or_default().insert(doc);
    }

    /// The posting set for a term, or `None` when the term was never
    /// indexed. Callers treat an absent term as the empty set.
    pub fn postings(&self, term: &str) -> Option<&BTreeSet<DocumentId>> {
        self.postings.get(term)
    }

    /// Whether the term has at least one posting.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of unique terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index holds no terms at all.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate over the indexed terms in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.postings.keys()
    }
}
