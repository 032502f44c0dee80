//! Errors for the multi-user extension (§4.4, §7).

use sse_crypto::CryptoError;
use thiserror::Error;

/// Failure modes specific to the envelope-gated multi-user layer.
#[derive(Debug, Error)]
pub enum MultiUserError {
    /// Opening a sealed envelope (a `state` or a `packKeys` blob)
    /// failed: wrong private key, tampered ciphertext, or the caller is
    /// not among the envelope's recipients. Fatal; the caller's state
    /// is left untouched.
    #[error("envelope operation failed: {0}")]
    Envelope(#[from] CryptoError),

    /// `search` was called before any `state` had been installed.
    #[error("no state key installed; call `state` first")]
    NoStateInstalled,

    /// An opened `state` envelope did not contain exactly 32 bytes.
    #[error("recovered session key had the wrong length: {actual} bytes")]
    InvalidSessionKeyLength {
        /// The length actually recovered.
        actual: usize,
    },

    /// The transported keyring failed to deserialise.
    #[error("keyring payload was not valid JSON: {0}")]
    KeyringPayload(#[from] serde_json::Error),

    /// A wrapped trapdoor was not valid base64.
    #[error("malformed base64 trapdoor: {0}")]
    Encoding(String),
}
