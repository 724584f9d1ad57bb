//! Text analysis: word normalization and tokenization.

pub mod normalizer;
pub mod tokenizer;

// Re-export for convenient access
pub use normalizer::normalize;
pub use tokenizer::tokenize;
