//! Streaming tokeniser (§4.1): a byte sink that accumulates a
//! per-document word-frequency sketch across chunks of arbitrary size.

use crate::errors::IndexerError;
use sse_types::{DocumentId, DocumentSketch, Word};
use std::collections::BTreeMap;
use std::io::Read;

/// Accumulates one document's word-frequency sketch across any number
/// of fed chunks, then finalises into a [`DocumentSketch`].
///
/// Tokenisation splits accumulated text on whitespace; the fragment
/// trailing the last whitespace boundary in a chunk is held back and
/// prepended to the next chunk, so a token split across two `feed`
/// calls is still counted once. Each surviving token is lowercased and
/// has every character outside `[a-z0-9]` stripped before counting;
/// tokens that normalise to the empty string are discarded.
pub struct Indexer {
    id: DocumentId,
    list: BTreeMap<Word, u64>,
    size: u64,
    pending: String,
}

impl Indexer {
    /// Start indexing a new document under `id`.
    pub fn new(id: impl Into<DocumentId>) -> Self {
        Self { id: id.into(), list: BTreeMap::new(), size: 0, pending: String::new() }
    }

    /// Total raw byte count fed so far, pre-normalisation.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Feed the next chunk of the document's byte stream.
    ///
    /// Chunks are decoded as UTF-8, replacing any invalid sequences;
    /// `size` still accounts for the raw byte length fed in.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.size += chunk.len() as u64;
        let text = String::from_utf8_lossy(chunk);

        let combined = if self.pending.is_empty() {
            text.into_owned()
        } else {
            let mut s = std::mem::take(&mut self.pending);
            s.push_str(&text);
            s
        };

        let ends_with_whitespace = combined.chars().last().map(char::is_whitespace).unwrap_or(true);
        let mut tokens: Vec<&str> = combined.split_whitespace().collect();

        if !ends_with_whitespace {
            if let Some(trailing) = tokens.pop() {
                self.pending = trailing.to_string();
            }
        }

        for token in tokens {
            self.ingest(token);
        }
    }

    /// Pull chunks from `reader` until EOF, feeding each one.
    pub fn feed_reader<R: Read>(&mut self, reader: &mut R, chunk_size: usize) -> Result<(), IndexerError> {
        let mut buf = vec![0u8; chunk_size.max(1)];
        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                return Ok(());
            }
            self.feed(&buf[..n]);
        }
    }

    /// Finalise the document: flush any trailing partial token and
    /// return the completed sketch.
    pub fn finalize(mut self) -> DocumentSketch {
        if !self.pending.is_empty() {
            let trailing = std::mem::take(&mut self.pending);
            self.ingest(&trailing);
        }
        DocumentSketch { id: self.id, list: self.list }
    }

    fn ingest(&mut self, token: &str) {
        let normalised = normalise(token);
        if !normalised.is_empty() {
            *self.list.entry(normalised).or_insert(0) += 1;
        }
    }
}

fn normalise(token: &str) -> String {
    token
        .chars()
        .filter_map(|c| {
            let lowered = c.to_ascii_lowercase();
            (lowered.is_ascii_lowercase() || lowered.is_ascii_digit()).then_some(lowered)
        })
        .collect()
}
