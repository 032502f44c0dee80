//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A cipher operation received a buffer of the wrong length
    /// (padding removal failed, or an input was not block-aligned).
    #[error("cipher error: {0}")]
    Cipher(String),

    /// An envelope could not be opened: wrong key, tampered
    /// ciphertext, or the named recipient is not in the keychain.
    #[error("envelope open failed: {0}")]
    EnvelopeOpen(String),

    /// The recipient name was not found in a keychain.
    #[error("unknown keychain entry: {0}")]
    UnknownKeyName(String),

    /// A key or nonce did not have the expected length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
}
