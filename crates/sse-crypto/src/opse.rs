//! # Order-Preserving Encryption (OPSE) port
//!
//! The core specification treats OPSE as an external collaborator: "a
//! keyed monotone map ℕ→ℕ" with `x <= y => opse(x) <= opse(y)`. This
//! module defines that contract as a trait so `sse-client` and
//! `sse-server` depend only on the property, plus exactly one
//! reference adapter so the workspace is runnable standalone.
//!
//! [`ReferenceOpse`] is **not** a production order-preserving cipher —
//! real OPSE constructions (mutable/immutable Boldyreva-style schemes)
//! need careful ciphertext-space balancing this reference skips. It
//! satisfies the monotonicity contract by reserving a wide per-value
//! stride (`STEP`) and filling the low bits with keyed pseudo-random
//! noise, which is enough to make posting counts order-comparable
//! without revealing their true magnitude to a casual observer.

use hmac::{Hmac, Mac};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::Zeroize;

type HmacSha256 = Hmac<Sha256>;

/// Spacing reserved per input value; pseudo-random noise is confined
/// below this so ordering between distinct inputs is never disturbed.
const STEP: u64 = 1 << 32;

/// The 32-byte sorting key shared by every domain in a keyring.
///
/// Zeroized on drop, the same key-hygiene convention the teacher's
/// `shared-crypto::symmetric::SecretKey` applies to its own 256-bit
/// secret material.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[zeroize(drop)]
pub struct OpseKey(pub [u8; 32]);

impl OpseKey {
    /// Generate a fresh random sorting key.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }
}

/// A keyed monotone map on non-negative integers.
pub trait OrderPreservingCipher {
    /// Encrypt `x` under `key`. Must satisfy `x <= y => encrypt(x) <= encrypt(y)`.
    fn encrypt(&self, key: &OpseKey, x: u64) -> u64;
}

/// Reference [`OrderPreservingCipher`] adapter (see module docs for
/// its limitations).
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceOpse;

impl OrderPreservingCipher for ReferenceOpse {
    fn encrypt(&self, key: &OpseKey, x: u64) -> u64 {
        let mut mac = HmacSha256::new_from_slice(&key.0).expect("HMAC accepts any key length");
        mac.update(&x.to_be_bytes());
        let digest = mac.finalize().into_bytes();
        let noise = u64::from_be_bytes(digest[..8].try_into().expect("digest has >= 8 bytes")) % STEP;
        x.checked_mul(STEP)
            .and_then(|base| base.checked_add(noise))
            .expect("OPSE input exceeds the range this reference adapter supports")
    }
}
