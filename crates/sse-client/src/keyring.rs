//! The Client's keyring (§3 Data Model, §9 Design Notes): a mapping of
//! domain name to domain key entry, plus the reserved `sorting` slot
//! holding the OPSE key shared by every domain.

use crate::errors::ClientError;
use serde::{Deserialize, Serialize};
use sse_crypto::OpseKey;
use sse_types::{DomainKeyEntry, DomainName, SORTING_KEY_NAME};
use std::collections::BTreeMap;

/// The single mutable value a Client owns: its domains' keys and the
/// shared sorting key. Mutated only by `secure_index`, `outdate`, and
/// (multi-user) `unpack_keys` — never partially, and never exposing a
/// seam to rotate the sorting key independently of the whole keyring.
///
/// Serialisable so `sse-multiuser`'s `packKeys`/`unpackKeys` can ship it
/// whole as the JSON payload of a sealed envelope.
///
/// Deliberately not `Debug`: the sorting key is secret material and
/// must not be formattable into a log line by accident.
#[derive(Clone, Serialize, Deserialize)]
pub struct Keyring {
    domains: BTreeMap<DomainName, DomainKeyEntry>,
    sorting: OpseKey,
}

impl Keyring {
    /// A fresh keyring with a freshly generated sorting key and no
    /// domains.
    pub fn new() -> Self {
        Self { domains: BTreeMap::new(), sorting: OpseKey::generate() }
    }

    /// Rebuild a keyring from an existing sorting key and domain set,
    /// e.g. after `unpack_keys` restores entries from a sealed
    /// envelope.
    pub fn from_parts(sorting: OpseKey, domains: BTreeMap<DomainName, DomainKeyEntry>) -> Self {
        Self { domains, sorting }
    }

    /// The shared OPSE sorting key.
    pub fn sorting_key(&self) -> &OpseKey {
        &self.sorting
    }

    /// All domain entries, by name.
    pub fn domains(&self) -> &BTreeMap<DomainName, DomainKeyEntry> {
        &self.domains
    }

    /// Install or overwrite a domain entry. Rejects the reserved name
    /// `"sorting"`.
    pub fn insert_domain(&mut self, name: DomainName, entry: DomainKeyEntry) -> Result<(), ClientError> {
        if name == SORTING_KEY_NAME {
            return Err(ClientError::ReservedDomainName);
        }
        self.domains.insert(name, entry);
        Ok(())
    }

    /// Remove the listed domains from the keyring (§4.2.4 `outdate`).
    /// A local operation only: the server copy is untouched.
    pub fn outdate(&mut self, names: &[DomainName]) {
        for name in names {
            self.domains.remove(name);
        }
    }
}

impl Default for Keyring {
    fn default() -> Self {
        Self::new()
    }
}
