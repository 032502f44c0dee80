//! # sse-client
//!
//! The single-user Client from the core specification's §4.2: owns a
//! keyring, builds padded and shuffled secure indexes from document
//! sketches, and derives per-word queries against every domain it
//! knows about.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod errors;
pub mod keyring;
pub mod padding;
pub mod shuffle;

pub use client::Client;
pub use config::PaddingProfile;
pub use errors::ClientError;
pub use keyring::Keyring;
