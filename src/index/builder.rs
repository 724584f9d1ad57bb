//! Corpus reading and index construction.
//!
//! A corpus is a sequence of line pairs: one document identifier line
//! followed by one text line per document. [`LineCorpus`] reads that
//! format from any buffered reader, and [`IndexBuilder`] feeds the pairs
//! into an [`InvertedIndex`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::analysis::tokenize;
use crate::error::{QuernError, Result};
use crate::index::inverted::InvertedIndex;
use crate::types::DocumentId;

/// Trait for sources that yield (document id, text) pairs.
pub trait CorpusSource {
    /// The next pair, or `None` at end of input.
    fn next_pair(&mut self) -> Result<Option<(DocumentId, String)>>;
}

/// A line-pair corpus over a buffered reader.
#[derive(Debug)]
pub struct LineCorpus<R: BufRead> {
    reader: R,
}

impl LineCorpus<BufReader<File>> {
    /// Open a corpus file.
    ///
    /// Failure to open is recoverable: the caller may report the error and
    /// proceed with an empty index.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| QuernError::corpus(format!("cannot open {}: {e}", path.display())))?;
        Ok(LineCorpus::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineCorpus<R> {
    /// Create a corpus over an already-open reader.
    pub fn new(reader: R) -> Self {
        LineCorpus { reader }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> CorpusSource for LineCorpus<R> {
    fn next_pair(&mut self) -> Result<Option<(DocumentId, String)>> {
        let id = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        // An identifier line with no text line after it (odd trailing
        // line) is silently discarded.
        let text = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        Ok(Some((id, text)))
    }
}

/// Builds an inverted index from a corpus source.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder;

impl IndexBuilder {
    /// Create a new index builder.
    pub fn new() -> Self {
        IndexBuilder
    }

    /// Read the source to exhaustion, adding a posting for every
    /// (term, document id) occurrence.
    ///
    /// Purely additive: nothing already in `index` is removed or
    /// overwritten, so repeated calls against the same index accumulate
    /// across corpora. Returns the number of complete pairs processed,
    /// not the number of terms or unique documents.
    pub fn build<S: CorpusSource>(&self, source: &mut S, index: &mut InvertedIndex) -> Result<usize> {
        let mut pages = 0;
        while let Some((id, text)) = source.next_pair()? {
            pages += 1;
            for term in tokenize(&text) {
                index.add_posting(term, id.clone());
            }
        }
        Ok(pages)
    }
}
