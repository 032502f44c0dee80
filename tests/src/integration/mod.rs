//! Cross-crate integration tests: the literal scenarios from spec §8
//! plus statistical/monotonicity property checks.

pub mod properties;
pub mod scenarios;
