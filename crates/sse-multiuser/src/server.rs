//! Server additions (§4.4.3): a thin outer layer that decrypts the
//! state-wrapped query and delegates to the single-user Server.

use crate::errors::MultiUserError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sse_crypto::envelope::{open_asymmetric, Keychain, SealedEnvelope};
use sse_crypto::ctr_decrypt;
use sse_server::{Server, ServerError};
use sse_types::{DomainName, DomainRecord, Query, SecureEntry};
use std::collections::BTreeMap;

/// Wraps a single-user [`Server`] with the current session state key,
/// installed by the owner's `state` and rotated to revoke outstanding
/// reader queries.
pub struct MultiUserServer {
    identity: String,
    keychain: Keychain,
    inner: Server,
    state_key: Option<[u8; 32]>,
}

impl MultiUserServer {
    /// Build a multi-user server around an existing single-user
    /// [`Server`], with no state key installed yet.
    pub fn new(identity: impl Into<String>, keychain: Keychain, inner: Server) -> Self {
        Self { identity: identity.into(), keychain, inner, state_key: None }
    }

    /// The wrapped single-user server's domain records.
    pub fn domains(&self) -> &BTreeMap<DomainName, DomainRecord> {
        self.inner.domains()
    }

    /// Open `sealed` (an owner-minted `state`) with this server's
    /// private key and install the recovered session key, superseding
    /// whatever key was current before. Every outstanding reader query
    /// wrapped under the old key will now decrypt to garbage trapdoors
    /// that miss.
    pub fn state(&mut self, sealed: &SealedEnvelope) -> Result<(), MultiUserError> {
        let bytes = open_asymmetric(&self.keychain, &self.identity, sealed)?;
        let len = bytes.len();
        let key: [u8; 32] = bytes.try_into().map_err(|_| MultiUserError::InvalidSessionKeyLength { actual: len })?;
        tracing::info!(identity = %self.identity, "state rotated: previous reader queries are now invalidated");
        self.state_key = Some(key);
        Ok(())
    }

    /// Decrypt every trapdoor in `query` with AES-256-CTR under the
    /// current state key, re-encode as base64, and delegate to the
    /// wrapped server's `search` on the inner query.
    pub fn search(&self, query: &Query) -> Result<Vec<SecureEntry>, MultiUserError> {
        let state_key = self.state_key.ok_or(MultiUserError::NoStateInstalled)?;

        let mut inner_query = BTreeMap::new();
        for (domain, trapdoors) in query {
            let mut inner_trapdoors = Vec::with_capacity(trapdoors.len());
            for wrapped in trapdoors {
                let raw = BASE64.decode(wrapped).map_err(|e| MultiUserError::Encoding(e.to_string()))?;
                let decrypted = ctr_decrypt(&state_key, &raw)?;
                inner_trapdoors.push(BASE64.encode(decrypted));
            }
            inner_query.insert(domain.clone(), inner_trapdoors);
        }

        Ok(self.inner.search(&inner_query))
    }

    /// Delegate directly to the wrapped server's `update` (§4.3.2); the
    /// multi-user layer has no opinion on domain growth.
    pub fn update(&mut self, domain: DomainName, index: DomainRecord, reps: &[DomainName]) -> Result<(), ServerError> {
        self.inner.update(domain, index, reps)
    }
}
