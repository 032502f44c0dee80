//! # Shared Crypto - SSE Cryptographic Primitives
//!
//! The primitives the core specification's External Interfaces section
//! names as "external collaborators" the index and query pipelines are
//! built on top of, but never re-specify: hashing, the two symmetric
//! cipher modes, trapdoor/filler derivation, order-preserving
//! encryption, and the message envelope used by the multi-user
//! extension.
//!
//! ## Components
//!
//! | Module | Algorithm | Use case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256, SHA-512 | `chain(value, n, alg)` |
//! | `symmetric` | AES-256-CBC (fixed IV), AES-256-CTR | Trapdoors, outer wrapper |
//! | `trapdoor` | SHA-256 + AES-256-CBC | §4.2.1 block/bucket-key derivation |
//! | `opse` | keyed monotone map | Count ranking without raw counts |
//! | `envelope` | X25519 + HKDF-SHA256 + ChaCha20-Poly1305 | §4.4 key distribution |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod envelope;
pub mod errors;
pub mod hashing;
pub mod opse;
pub mod symmetric;
pub mod trapdoor;

pub use envelope::{open_asymmetric, open_symmetric, seal_asymmetric, seal_symmetric, Keychain, SealedEnvelope};
pub use errors::CryptoError;
pub use hashing::{chain, hash, sha256, HashAlg};
pub use opse::{OpseKey, OrderPreservingCipher, ReferenceOpse};
pub use symmetric::{cbc_decrypt_fixed_iv, cbc_encrypt_fixed_iv, ctr_decrypt, ctr_encrypt, derive_iv, BLOCK_LEN, KEY_LEN};
pub use trapdoor::{filler_bucket, trapdoor_key, DUMMY_COUNT_MODULUS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
