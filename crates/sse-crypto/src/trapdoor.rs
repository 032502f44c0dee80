//! # Trapdoor Derivation
//!
//! The deterministic keyed token construction shared by index building
//! and query derivation (§4.2.1). This is "the only source of
//! non-padding bucket keys": both a real word's trapdoor and a filler
//! bucket's key are produced by the same block-and-encrypt pipeline,
//! the only difference being what goes into the word slot of the
//! 32-byte block.

use crate::hashing::sha256;
use crate::symmetric::{cbc_encrypt_fixed_iv, KEY_LEN};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Bytes of `w` kept in the block; the rest of the first 28 bytes is
/// zero-filled.
const WORD_FIELD_LEN: usize = 28;
/// The modulus filler buckets draw their dummy OPSE-less count from.
pub const DUMMY_COUNT_MODULUS: u64 = 131_072;

/// Build the 32-byte block `B` for slot `i`: `word` right-aligned in
/// the first 28 bytes (truncated to 28 bytes if longer), zero-padded
/// on the left, with `i` as a big-endian `u32` in bytes 28..32.
fn build_block(word: &[u8], slot: u32) -> [u8; 32] {
    let mut block = [0u8; 32];
    let word = &word[..word.len().min(WORD_FIELD_LEN)];
    let offset = WORD_FIELD_LEN - word.len();
    block[offset..offset + word.len()].copy_from_slice(word);
    block[28..32].copy_from_slice(&slot.to_be_bytes());
    block
}

/// Truncate the CBC ciphertext produced for a block to the 32-byte
/// bucket key convention fixed in `DESIGN.md`: the bucket key is
/// always `ciphertext[0..32]`, regardless of the padded ciphertext's
/// true length.
fn bucket_key_bytes(ciphertext: &[u8]) -> &[u8] {
    &ciphertext[..32.min(ciphertext.len())]
}

/// The deterministic trapdoor for `(word, slot)` under domain key
/// `key`: base64 of the first 32 bytes of `AES-256-CBC(SHA-256(B))`.
pub fn trapdoor_key(key: &[u8; KEY_LEN], word: &str, slot: u32) -> String {
    let block = build_block(word.as_bytes(), slot);
    let digest = sha256(&block);
    let ciphertext = cbc_encrypt_fixed_iv(key, &digest);
    BASE64.encode(bucket_key_bytes(&ciphertext))
}

/// The `l`-th filler bucket for a secure index with `docs_len`
/// distinct documents: trapdoor of the empty word at slot
/// `docs_len + l`, with four zero bytes appended to the hashed block
/// before encryption so a dummy count can be read out of the next
/// ciphertext block. Returns `(bucket_key, dummy_count)`.
pub fn filler_bucket(key: &[u8; KEY_LEN], docs_len: u64, l: u64) -> (String, u64) {
    let slot = u32::try_from(docs_len + l).expect("filler slot exceeds u32 range");
    let block = build_block(b"", slot);
    let digest = sha256(&block);

    let mut plaintext = Vec::with_capacity(36);
    plaintext.extend_from_slice(&digest);
    plaintext.extend_from_slice(&[0u8; 4]);

    let ciphertext = cbc_encrypt_fixed_iv(key, &plaintext);
    let key_part = BASE64.encode(bucket_key_bytes(&ciphertext));
    let count_bytes: [u8; 4] = ciphertext[32..36].try_into().expect("cbc output has a third block");
    let count = u32::from_be_bytes(count_bytes) as u64 % DUMMY_COUNT_MODULUS;
    (key_part, count)
}
