//! Inverted index storage and construction.

pub mod builder;
pub mod inverted;

// Re-export for convenient access
pub use builder::{CorpusSource, IndexBuilder, LineCorpus};
pub use inverted::InvertedIndex;
