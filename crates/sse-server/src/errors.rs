//! Errors for the single-user Server (§4.3, §7).

use sse_types::{DomainName, MergeRequest};
use thiserror::Error;

/// Failure modes the Server can report.
///
/// A domain absent from the store is deliberately *not* a hard error at
/// the `search` boundary — `search` swallows it and returns no results,
/// matching the all-or-nothing abort rule in §4.3.1. The variant exists
/// so the server has something to log the domain name into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerError {
    /// A query named a domain the server has no record of.
    #[error("unknown domain: {0}")]
    UnknownDomain(DomainName),

    /// `update` would orphan an existing, at-least-as-large domain that
    /// the caller did not list in `reps`.
    #[error("update rejected: domain {} would be orphaned, merge its {} documents first", .0.domain, .0.docs.len())]
    GrowthViolation(MergeRequest),

    /// `update` named the reserved domain `"sorting"`, which is
    /// reserved for the client keyring's OPSE sorting key and must
    /// never be shadowed by a server-side domain.
    #[error("domain name \"sorting\" is reserved for the OPSE sorting key")]
    ReservedDomain,
}
