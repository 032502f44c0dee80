//! Reader operations (§4.4.2): installing a packed keyring and wrapping
//! queries under the owner's current session state.

use crate::errors::MultiUserError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sse_client::{Client, Keyring};
use sse_crypto::envelope::{open_asymmetric, Keychain, SealedEnvelope};
use sse_crypto::{ctr_encrypt, ReferenceOpse};
use sse_types::Query;

/// A reader: its own asymmetric identity, and the single-user Client it
/// installs a packed keyring into.
pub struct Reader {
    identity: String,
    keychain: Keychain,
    client: Client<ReferenceOpse>,
}

impl Reader {
    /// Build a reader with no keyring installed yet.
    pub fn new(identity: impl Into<String>, keychain: Keychain) -> Self {
        Self { identity: identity.into(), keychain, client: Client::new() }
    }

    /// Open `packed` with this reader's private key and install the
    /// recovered keyring, replacing whatever the reader held before.
    pub fn unpack_keys(&mut self, packed: &SealedEnvelope) -> Result<(), MultiUserError> {
        let opened = open_asymmetric(&self.keychain, &self.identity, packed)?;
        let keyring: Keyring = serde_json::from_slice(&opened)?;
        *self.client.keyring_mut() = keyring;
        Ok(())
    }

    /// Open `state` with this reader's private key to recover the
    /// session key `S`, derive the inner query by §4.2.3, then
    /// re-encrypt every trapdoor with AES-256-CTR under `S`.
    pub fn create_query(&self, state: &SealedEnvelope, word: &str) -> Result<Query, MultiUserError> {
        let session_key = self.open_session_key(state)?;
        let inner = self.client.create_query(word);

        inner
            .into_iter()
            .map(|(domain, trapdoors)| {
                let wrapped = trapdoors
                    .iter()
                    .map(|trapdoor| rewrap(&session_key, trapdoor))
                    .collect::<Result<Vec<_>, MultiUserError>>()?;
                Ok((domain, wrapped))
            })
            .collect()
    }

    fn open_session_key(&self, state: &SealedEnvelope) -> Result<[u8; 32], MultiUserError> {
        let bytes = open_asymmetric(&self.keychain, &self.identity, state)?;
        let len = bytes.len();
        bytes.try_into().map_err(|_| MultiUserError::InvalidSessionKeyLength { actual: len })
    }

    /// The unwrapped inner query the installed keyring would produce
    /// for `word`, bypassing state-key wrapping. Useful for verifying
    /// that an `unpack_keys` call restored a keyring byte-identical to
    /// the owner's, without needing a state envelope at all.
    pub fn inner_query(&self, word: &str) -> Query {
        self.client.create_query(word)
    }
}

fn rewrap(session_key: &[u8; 32], trapdoor: &str) -> Result<String, MultiUserError> {
    let raw = BASE64.decode(trapdoor).map_err(|e| MultiUserError::Encoding(e.to_string()))?;
    Ok(BASE64.encode(ctr_encrypt(session_key, &raw)))
}
