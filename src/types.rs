//! Core type aliases shared across the crate.

use std::collections::BTreeSet;

/// A canonicalized index term (lowercased, edge-trimmed).
///
/// Terms are only ever produced by [`crate::analysis::normalize`], which
/// guarantees they are non-empty and contain at least one alphabetic
/// character.
pub type Term = String;

/// Opaque identifier for a unit of indexed text (a URL or filename).
pub type DocumentId = String;

/// The set of document identifiers satisfying a query.
///
/// Ordered so that results print deterministically.
pub type ResultSet = BTreeSet<DocumentId>;
