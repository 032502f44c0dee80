//! # Error Types
//!
//! Errors raised by operations on the shared entity types themselves
//! (as opposed to the cryptographic or protocol errors raised by
//! `sse-crypto`, `sse-client`, `sse-server`, and `sse-multiuser`).

use thiserror::Error;

/// Errors raised while constructing or validating shared entities.
#[derive(Debug, Clone, Error)]
pub enum TypesError {
    /// A domain name collided with the reserved `"sorting"` keyring slot.
    #[error("domain name \"sorting\" is reserved for the OPSE sorting key")]
    ReservedDomainName,
}
