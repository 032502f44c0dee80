//! # Symmetric Ciphers
//!
//! Two block-cipher modes, both over AES-256, matching the two roles
//! the core specification's External Interfaces section assigns them:
//!
//! - **AES-256-CBC** for deterministic trapdoor derivation (§4.2.1).
//!   The scheme needs the *same* plaintext under the *same* key to
//!   always yield the *same* ciphertext, so the IV cannot be random —
//!   it is derived from the key itself (see [`derive_iv`]). This is
//!   the "key-derived IV convention" the spec requires implementers to
//!   fix and document bit-for-bit; deviating from it breaks
//!   interoperability between client and server.
//! - **AES-256-CTR** for the multi-user outer query wrapper (§4.4.2),
//!   which has no determinism requirement and uses a random nonce.
//!
//! Deterministic CBC with a derived IV is a known weak point (it
//! leaks equality of plaintexts under the same key, matching the
//! scheme's own security argument) — see the Design Notes section of
//! the specification. A production deployment may substitute AES-SIV
//! or a keyed PRF for [`cbc_encrypt_fixed_iv`], but that changes the
//! scheme, not just the implementation.

use crate::errors::CryptoError;
use crate::hashing::sha256;
use aes::Aes256;
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, StreamCipher};
use rand::RngCore;

type CbcEnc = cbc::Encryptor<Aes256>;
type CbcDec = cbc::Decryptor<Aes256>;
type Ctr64 = ctr::Ctr128BE<Aes256>;

/// Length of an AES-256 key, in bytes.
pub const KEY_LEN: usize = 32;
/// Length of an AES block / CBC IV / CTR nonce, in bytes.
pub const BLOCK_LEN: usize = 16;

/// Derive the fixed CBC IV for a given 32-byte domain key: the first
/// 16 bytes of `SHA-256(key)`. Deterministic in the key alone, so any
/// party holding the same domain key reproduces the same IV and thus
/// the same trapdoor for a given plaintext block.
pub fn derive_iv(key: &[u8; KEY_LEN]) -> [u8; BLOCK_LEN] {
    let digest = sha256(key);
    let mut iv = [0u8; BLOCK_LEN];
    iv.copy_from_slice(&digest[..BLOCK_LEN]);
    iv
}

/// Encrypt `plaintext` with AES-256-CBC under `key`, using the fixed,
/// key-derived IV and PKCS#7 padding. Deterministic: the same
/// `(key, plaintext)` pair always yields the same ciphertext.
pub fn cbc_encrypt_fixed_iv(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    let iv = derive_iv(key);
    CbcEnc::new(key.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt a buffer produced by [`cbc_encrypt_fixed_iv`].
pub fn cbc_decrypt_fixed_iv(key: &[u8; KEY_LEN], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let iv = derive_iv(key);
    CbcDec::new(key.into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| CryptoError::Cipher(e.to_string()))
}

/// Encrypt `plaintext` with AES-256-CTR under `key` and a fresh random
/// nonce. Returns `nonce || ciphertext`; not deterministic, used only
/// for the multi-user outer wrapper where no reproducibility is
/// required.
pub fn ctr_encrypt(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    let mut nonce = [0u8; BLOCK_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);
    let mut buf = plaintext.to_vec();
    Ctr64::new(key.into(), &nonce.into()).apply_keystream(&mut buf);
    let mut out = Vec::with_capacity(BLOCK_LEN + buf.len());
    out.extend_from_slice(&nonce);
    out.extend_from_slice(&buf);
    out
}

/// Decrypt a buffer produced by [`ctr_encrypt`].
pub fn ctr_decrypt(key: &[u8; KEY_LEN], blob: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if blob.len() < BLOCK_LEN {
        return Err(CryptoError::InvalidLength { expected: BLOCK_LEN, actual: blob.len() });
    }
    let (nonce, ciphertext) = blob.split_at(BLOCK_LEN);
    let mut buf = ciphertext.to_vec();
    Ctr64::new(key.into(), nonce.into()).apply_keystream(&mut buf);
    Ok(buf)
}
