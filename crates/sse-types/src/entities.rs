//! # Core Domain Entities
//!
//! Defines the wire/persisted shapes of the searchable-encryption scheme,
//! as specified in the Data Model section of the core specification.
//!
//! ## Clusters
//!
//! - **Plaintext side**: `DocumentSketch`, `PlainEntry`
//! - **Secure side**: `SecureEntry`, `SecureIndex`, `DomainRecord`
//! - **Client-side state**: `Keyring`, `DomainKeyEntry`
//! - **Queries**: `Query`, `MergeRequest`

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An opaque, caller-chosen document identifier. Never interpreted or
/// normalised by this crate.
pub type DocumentId = String;

/// A normalised word token, see the Indexer's tokenisation rules.
pub type Word = String;

/// A base64-encoded secure bucket key (a trapdoor, or a filler key).
pub type BucketKey = String;

/// A domain name chosen by the owner. Must never equal the reserved
/// literal `"sorting"` (see [`SORTING_KEY_NAME`]).
pub type DomainName = String;

/// Per-document word-frequency sketch produced by the Indexer on
/// finalisation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSketch {
    /// Caller-chosen, opaque, unlinkable document id.
    pub id: DocumentId,
    /// Normalised word -> occurrence count.
    pub list: BTreeMap<Word, u64>,
}

/// One posting for a word in one document, in plaintext form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainEntry {
    /// The document the posting belongs to.
    pub id: DocumentId,
    /// The true occurrence count in that document.
    pub count: u64,
}

/// One posting as stored in a secure index: the document id in the
/// clear, the count replaced by its order-preserving ciphertext image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureEntry {
    /// Document id, stored in the clear.
    pub id: DocumentId,
    /// OPSE image of the true count (or, for filler buckets, a dummy
    /// count drawn from the filler generator — see §4.2.2 step 7).
    pub opse_count: u64,
}

/// A secure index as built by the Client and stored/transported as-is.
///
/// `index`'s key enumeration order is security-relevant: it must be the
/// cryptographically shuffled order produced by `sse_client`'s
/// `secure_index`, and any serialisation of this type must preserve
/// that order. [`IndexMap`] is used instead of a `BTreeMap`/`HashMap`
/// precisely so insertion order survives untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecureIndex {
    /// Deduplicated document ids, first-seen order.
    pub docs: Vec<DocumentId>,
    /// Bucket key -> secure entry, in shuffled insertion order.
    pub index: IndexMap<BucketKey, SecureEntry>,
}

/// A domain record as held by the Server: identical shape to
/// [`SecureIndex`], named separately because it is reached via a
/// domain name rather than handed to a caller directly.
pub type DomainRecord = SecureIndex;

/// One entry of a Client's keyring: how many documents the domain
/// covers, and the domain's 32-byte key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainKeyEntry {
    /// Number of documents indexed under this domain
    /// (`docCount`, the trapdoor slot upper bound).
    pub doc_count: u64,
    /// The domain's 32-byte symmetric key.
    pub key: [u8; 32],
}

/// A query as produced by `createQuery`: every known domain maps to
/// one trapdoor per slot `i in [0, docCount)`.
pub type Query = BTreeMap<DomainName, Vec<BucketKey>>;

/// The server's response when an `update` would orphan an existing,
/// at-least-as-large domain: names the domain and its current document
/// list so the client can merge and retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequest {
    /// The domain whose growth would be violated.
    pub domain: DomainName,
    /// That domain's current document ids.
    pub docs: Vec<DocumentId>,
}

/// The reserved keyring entry name for the shared OPSE sorting key.
pub const SORTING_KEY_NAME: &str = "sorting";
