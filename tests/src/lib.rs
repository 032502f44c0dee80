//! # SSE Workspace Test Suite
//!
//! Unified test crate containing the literal end-to-end scenarios and
//! cross-crate property checks from the core specification's Testable
//! Properties section (§8), exercised against the real `sse-indexer`,
//! `sse-client`, `sse-server`, and `sse-multiuser` crates rather than
//! any single crate's own unit tests.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs   # The literal S1-S6 scenarios from spec §8
//!     └── properties.rs  # Statistical / monotonicity property checks
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo test -p sse-tests
//! ```

#![allow(unused_imports)]

pub mod integration;
