//! # sse-indexer
//!
//! The streaming tokeniser from the core specification's Indexer
//! section: a byte sink that turns a document's text into a
//! normalised word-frequency [`sse_types::DocumentSketch`], one
//! document at a time.

#![warn(missing_docs)]

pub mod errors;
pub mod tokenizer;

pub use errors::IndexerError;
pub use tokenizer::Indexer;
