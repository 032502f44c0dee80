//! # sse-multiuser
//!
//! The multi-user extension from the core specification's §4.4: a
//! second, envelope-gated cipher layered on top of every trapdoor,
//! keyed by an owner-minted session state that can be rotated to
//! revoke outstanding reader queries. Expressed as a thin outer layer
//! around [`sse_client::Client`] and [`sse_server::Server`] rather than
//! as implementation inheritance — see [`server::MultiUserServer`].

#![warn(missing_docs)]

pub mod errors;
pub mod owner;
pub mod reader;
pub mod server;

pub use errors::MultiUserError;
pub use owner::Owner;
pub use reader::Reader;
pub use server::MultiUserServer;
