//! Tunable padding parameters (§4.2.2 step 6).
//!
//! The two staircase vectors are constants of the scheme, not
//! deployment configuration, but are grouped into a `Default`-derived
//! struct rather than hard-coded so a caller can exercise the padding
//! formula against a smaller table in tests without touching
//! `secure_index` itself.

/// Threshold / bucket-count staircases used to compute a secure
/// index's padded bucket count from the largest document size fed
/// into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingProfile {
    /// Cumulative byte-size thresholds for each tier.
    pub thresholds: [u64; 3],
    /// Bucket-count increment contributed by each tier.
    pub increments: [u64; 3],
}

impl Default for PaddingProfile {
    fn default() -> Self {
        Self { thresholds: [256, 131_072, 50_331_648], increments: [256, 65_536, 16_777_216] }
    }
}
