//! Client error types.

use thiserror::Error;

/// Errors raised by single-user Client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A caller tried to use the reserved domain name `"sorting"`.
    #[error("domain name \"sorting\" is reserved for the OPSE sorting key")]
    ReservedDomainName,
}
