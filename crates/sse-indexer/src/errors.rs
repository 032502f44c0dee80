//! Indexer error types.
//!
//! The core specification is explicit that the tokeniser itself raises
//! no errors beyond whatever the underlying byte source produces. This
//! crate has no pull-based byte source of its own (callers push
//! chunks), so the only error this type carries today is the one
//! surfaced by the optional [`crate::Indexer::feed_reader`]
//! convenience, which does pull from a caller-supplied `Read`.

use thiserror::Error;

/// Errors that can arise while indexing a document.
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The underlying byte source failed while `feed_reader` was
    /// pulling chunks from it.
    #[error("reading chunk from byte source: {0}")]
    Io(#[from] std::io::Error),
}
