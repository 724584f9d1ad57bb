//! # Quern
//!
//! A tiny in-memory boolean keyword search engine.
//!
//! Quern grinds a line-pair corpus (one document identifier line followed
//! by one text line per document) into an inverted index, then answers
//! boolean keyword queries against it with set algebra: plain terms union,
//! `+` terms intersect, `-` terms subtract. Matching is binary membership;
//! there is no scoring.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Fully in-memory index, built once and queried repeatedly
//! - Whitespace tokenization with punctuation-trimming normalization
//! - Boolean queries with `+`/`-` modifiers, evaluated left to right

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod query;
pub mod types;

pub mod prelude {
    pub use crate::analysis::{normalize, tokenize};
    pub use crate::error::{QuernError, Result};
    pub use crate::index::{CorpusSource, IndexBuilder, InvertedIndex, LineCorpus};
    pub use crate::query::{Occur, QueryTerm, evaluate, parse_query};
    pub use crate::types::{DocumentId, ResultSet, Term};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
