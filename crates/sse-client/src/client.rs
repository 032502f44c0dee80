//! The single-user Client (§4.2): builds secure indexes from document
//! sketches and derives queries against everything in its keyring.

use crate::config::PaddingProfile;
use crate::errors::ClientError;
use crate::keyring::Keyring;
use crate::padding;
use crate::shuffle;
use rand::RngCore;
use sse_crypto::{filler_bucket, trapdoor_key, OrderPreservingCipher, ReferenceOpse};
use sse_types::{BucketKey, DocumentId, DocumentSketch, DomainKeyEntry, DomainName, Query, SecureEntry, SecureIndex, Word};
use std::collections::BTreeMap;

/// Owns one keyring and builds/queries secure indexes against it.
///
/// Generic in the OPSE adapter so a deployer can swap
/// [`ReferenceOpse`] for a production order-preserving cipher without
/// touching this type's logic; defaults to the reference adapter so
/// the crate is usable standalone.
pub struct Client<O: OrderPreservingCipher = ReferenceOpse> {
    keyring: Keyring,
    opse: O,
    padding: PaddingProfile,
}

impl Client<ReferenceOpse> {
    /// A fresh Client with a new keyring and the reference OPSE
    /// adapter.
    pub fn new() -> Self {
        Self { keyring: Keyring::new(), opse: ReferenceOpse, padding: PaddingProfile::default() }
    }
}

impl Default for Client<ReferenceOpse> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OrderPreservingCipher> Client<O> {
    /// A Client built around a specific OPSE adapter and padding
    /// profile, e.g. for restoring a reader's state in `sse-multiuser`.
    pub fn with_parts(keyring: Keyring, opse: O, padding: PaddingProfile) -> Self {
        Self { keyring, opse, padding }
    }

    /// The underlying keyring.
    pub fn keyring(&self) -> &Keyring {
        &self.keyring
    }

    /// Mutable access to the underlying keyring, for `sse-multiuser`'s
    /// `unpack_keys`.
    pub fn keyring_mut(&mut self) -> &mut Keyring {
        &mut self.keyring
    }

    /// Build a secure index from one or more document sketches under
    /// a fresh domain key, and record the new domain in the keyring.
    ///
    /// `max` is the caller-supplied maximum document size, in bytes,
    /// among `sketches`; it drives the padding target (§4.2.2 step 6).
    pub fn secure_index(&mut self, domain: DomainName, max: u64, sketches: &[DocumentSketch]) -> Result<SecureIndex, ClientError> {
        let mut domain_key = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut domain_key);

        let (docs, merged) = merge_sketches(sketches);

        let mut sindex: Vec<(BucketKey, SecureEntry)> = Vec::new();
        for (word, entries) in &merged {
            for (slot, (id, count)) in entries.iter().enumerate() {
                let key = trapdoor_key(&domain_key, word, slot as u32);
                let opse_count = self.opse.encrypt(self.keyring.sorting_key(), *count);
                sindex.push((key, SecureEntry { id: id.clone(), opse_count }));
            }
        }

        let target = padding::bucket_count(&self.padding, max);
        let mut filler_counter = 0u64;
        for doc_id in &docs {
            let existing = sindex.iter().filter(|(_, entry)| &entry.id == doc_id).count() as u64;
            let needed = target.saturating_sub(existing).saturating_sub(1);
            for _ in 0..needed {
                let (key, dummy_count) = filler_bucket(&domain_key, docs.len() as u64, filler_counter);
                filler_counter += 1;
                sindex.push((key, SecureEntry { id: doc_id.clone(), opse_count: dummy_count }));
            }
        }

        self.keyring.insert_domain(domain, DomainKeyEntry { doc_count: docs.len() as u64, key: domain_key })?;

        let index = shuffle::shuffle(sindex, &mut rand::thread_rng());
        Ok(SecureIndex { docs, index })
    }

    /// Derive a query for `word` against every domain currently in the
    /// keyring (§4.2.3). All domains are always included, so the
    /// server cannot infer which domain the word belongs to.
    pub fn create_query(&self, word: &str) -> Query {
        let mut query = BTreeMap::new();
        for (name, entry) in self.keyring.domains() {
            let trapdoors = (0..entry.doc_count).map(|slot| trapdoor_key(&entry.key, word, slot as u32)).collect();
            query.insert(name.clone(), trapdoors);
        }
        query
    }

    /// Remove domains from the keyring (§4.2.4). Local only.
    pub fn outdate(&mut self, domains: &[DomainName]) {
        self.keyring.outdate(domains);
    }
}

/// Merge sketches into `(docs, word -> [(id, count), ...])`, with
/// `docs` deduplicated in first-seen order and each word's entry list
/// in the order its documents were supplied.
fn merge_sketches(sketches: &[DocumentSketch]) -> (Vec<DocumentId>, BTreeMap<Word, Vec<(DocumentId, u64)>>) {
    let mut docs = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let mut merged: BTreeMap<Word, Vec<(DocumentId, u64)>> = BTreeMap::new();

    for sketch in sketches {
        if seen.insert(sketch.id.clone()) {
            docs.push(sketch.id.clone());
        }
        for (word, count) in &sketch.list {
            merged.entry(word.clone()).or_default().push((sketch.id.clone(), *count));
        }
    }

    (docs, merged)
}
