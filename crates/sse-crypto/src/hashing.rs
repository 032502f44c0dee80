//! # Hashing
//!
//! SHA-256 and SHA-512 with chaining, as specified in the External
//! Interfaces section of the core specification: `chain(value, n, alg)`
//! applies `hash` `n` times, with `n` defaulting to 1 and `alg`
//! defaulting to SHA-512.

use sha2::{Digest, Sha256, Sha512};

/// Which hash function a chained application uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlg {
    /// SHA-256, used throughout the trapdoor derivation (§4.2.1).
    Sha256,
    /// SHA-512, the default algorithm for generic chaining.
    #[default]
    Sha512,
}

/// One-shot hash of `data` under `alg`.
pub fn hash(alg: HashAlg, data: &[u8]) -> Vec<u8> {
    match alg {
        HashAlg::Sha256 => Sha256::digest(data).to_vec(),
        HashAlg::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// SHA-256 of `data`, fixed-size for call sites that build a 32-byte
/// block out of the digest (e.g. trapdoor derivation).
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Apply `hash` to `value` `n` times, feeding each output back in as
/// the next input. `n = 0` returns `value` unchanged.
pub fn chain(value: &[u8], n: u32, alg: HashAlg) -> Vec<u8> {
    let mut current = value.to_vec();
    for _ in 0..n {
        current = hash(alg, &current);
    }
    current
}
