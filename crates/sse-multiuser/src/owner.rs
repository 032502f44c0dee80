//! Owner operations (§4.4.1): minting a fresh session state and
//! publishing the keyring to authorised readers.

use crate::errors::MultiUserError;
use rand::RngCore;
use sse_client::Client;
use sse_crypto::envelope::{seal_asymmetric, Keychain, SealedEnvelope};
use sse_crypto::OrderPreservingCipher;
use std::collections::BTreeMap;
use x25519_dalek::PublicKey;

/// The multi-user owner: holds the asymmetric keychain of every known
/// principal and knows which name belongs to the server, so `pack_keys`
/// can exclude it.
pub struct Owner {
    keychain: Keychain,
    server_name: String,
}

impl Owner {
    /// Build an owner from its asymmetric keychain (own private key
    /// plus every reader's and the server's public key) and the name
    /// under which the server's key is registered.
    pub fn new(keychain: Keychain, server_name: impl Into<String>) -> Self {
        Self { keychain, server_name: server_name.into() }
    }

    /// Generate a fresh 32-byte session key and seal it to every known
    /// public key, the server included — the server must be able to
    /// open its own `state` entry to learn the new key. Rotating state
    /// is the revocation primitive: it invalidates every reader query
    /// wrapped under the previous session key.
    pub fn state(&self) -> SealedEnvelope {
        let mut session_key = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut session_key);
        seal_asymmetric(&self.keychain.public, &session_key)
    }

    /// Serialise `client`'s keyring as JSON and seal it to every known
    /// public key *except* the server's — the server must never be
    /// able to recover domain keys or the sorting key.
    pub fn pack_keys<O: OrderPreservingCipher>(&self, client: &Client<O>) -> Result<SealedEnvelope, MultiUserError> {
        let payload = serde_json::to_vec(client.keyring())?;
        let recipients: BTreeMap<String, PublicKey> = self
            .keychain
            .public
            .iter()
            .filter(|(name, _)| name.as_str() != self.server_name)
            .map(|(name, key)| (name.clone(), *key))
            .collect();
        Ok(seal_asymmetric(&recipients, &payload))
    }
}
