//! # Message Envelope
//!
//! The core specification treats the message envelope as an opaque
//! authenticated-encryption oracle keyed by a keychain shaped
//! `{private: {name -> key}, public: {name -> key}}`, usable in
//! symmetric or asymmetric mode. This module provides one reference
//! adapter for each mode: a sealed-box construction (ephemeral X25519
//! + HKDF-SHA256 + ChaCha20-Poly1305) for the asymmetric mode the
//! multi-user extension's `packKeys`/`state` rely on, plus a plain
//! ChaCha20-Poly1305 seal for the symmetric mode.

use crate::errors::CryptoError;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Nonce};
use hkdf::Hkdf;
use rand::RngCore;
use sha2::Sha256;
use std::collections::BTreeMap;
use x25519_dalek::{PublicKey, StaticSecret};

const NONCE_LEN: usize = 12;
const HKDF_INFO: &[u8] = b"sse-multiuser-envelope-v1";

/// A principal's asymmetric identity: their own private keys, plus
/// every known principal's public key, both by name.
pub struct Keychain {
    /// This principal's own private keys, by name.
    pub private: BTreeMap<String, StaticSecret>,
    /// Every known principal's public key, by name (may include this
    /// principal's own).
    pub public: BTreeMap<String, PublicKey>,
}

impl Keychain {
    /// An empty keychain.
    pub fn new() -> Self {
        Self { private: BTreeMap::new(), public: BTreeMap::new() }
    }
}

impl Default for Keychain {
    fn default() -> Self {
        Self::new()
    }
}

/// An asymmetric envelope sealed to a set of named recipients: each
/// recipient's entry decrypts independently of the others, so a
/// recipient with no matching public key (e.g. the server, when
/// `packKeys` excludes it) simply has no entry to open.
#[derive(Debug, Clone, Default)]
pub struct SealedEnvelope {
    /// Recipient name -> `ephemeral_public_key || nonce || ciphertext`.
    pub per_recipient: BTreeMap<String, Vec<u8>>,
}

/// Seal `plaintext` to every named public key in `recipients`.
pub fn seal_asymmetric(recipients: &BTreeMap<String, PublicKey>, plaintext: &[u8]) -> SealedEnvelope {
    let mut per_recipient = BTreeMap::new();
    for (name, recipient_key) in recipients {
        per_recipient.insert(name.clone(), seal_to_one(recipient_key, plaintext));
    }
    SealedEnvelope { per_recipient }
}

fn seal_to_one(recipient_key: &PublicKey, plaintext: &[u8]) -> Vec<u8> {
    let ephemeral = StaticSecret::random_from_rng(rand::thread_rng());
    let ephemeral_public = PublicKey::from(&ephemeral);
    let shared = ephemeral.diffie_hellman(recipient_key);
    let symmetric_key = derive_symmetric_key(shared.as_bytes());

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let cipher = ChaCha20Poly1305::new((&symmetric_key).into());
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .expect("ChaCha20Poly1305 encryption does not fail");

    let mut blob = Vec::with_capacity(32 + NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(ephemeral_public.as_bytes());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    blob
}

/// Open `sealed`'s entry for `my_name` using `keychain`'s matching
/// private key.
pub fn open_asymmetric(keychain: &Keychain, my_name: &str, sealed: &SealedEnvelope) -> Result<Vec<u8>, CryptoError> {
    let my_secret = keychain
        .private
        .get(my_name)
        .ok_or_else(|| CryptoError::UnknownKeyName(my_name.to_string()))?;
    let blob = sealed
        .per_recipient
        .get(my_name)
        .ok_or_else(|| CryptoError::EnvelopeOpen(format!("no entry for {my_name}")))?;

    if blob.len() < 32 + NONCE_LEN {
        return Err(CryptoError::InvalidLength { expected: 32 + NONCE_LEN, actual: blob.len() });
    }
    let (ephemeral_public_bytes, rest) = blob.split_at(32);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let ephemeral_public_bytes: [u8; 32] = ephemeral_public_bytes.try_into().expect("checked length above");
    let ephemeral_public = PublicKey::from(ephemeral_public_bytes);
    let shared = my_secret.diffie_hellman(&ephemeral_public);
    let symmetric_key = derive_symmetric_key(shared.as_bytes());

    let cipher = ChaCha20Poly1305::new((&symmetric_key).into());
    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CryptoError::EnvelopeOpen("authentication failed".to_string()))
}

/// Seal `plaintext` symmetrically under `key` (random nonce, prepended
/// to the ciphertext).
pub fn seal_symmetric(key: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);
    let cipher = ChaCha20Poly1305::new(key.into());
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
        .expect("ChaCha20Poly1305 encryption does not fail");
    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    blob
}

/// Open a blob produced by [`seal_symmetric`].
pub fn open_symmetric(key: &[u8; 32], blob: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if blob.len() < NONCE_LEN {
        return Err(CryptoError::InvalidLength { expected: NONCE_LEN, actual: blob.len() });
    }
    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let cipher = ChaCha20Poly1305::new(key.into());
    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CryptoError::EnvelopeOpen("authentication failed".to_string()))
}

fn derive_symmetric_key(shared_secret: &[u8; 32]) -> [u8; 32] {
    let hk = Hkdf::<Sha256>::new(None, shared_secret);
    let mut out = [0u8; 32];
    hk.expand(HKDF_INFO, &mut out).expect("32 bytes is a valid HKDF-SHA256 output length");
    out
}
