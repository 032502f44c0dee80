//! Padding bucket-count arithmetic (§4.2.2 step 6).
//!
//! The staircase walk climbs `thresholds`/`increments` while the
//! running threshold stays at or below `max`, then backs the
//! threshold (but not the accumulated bucket count — see below) off
//! by the last tier and adds a linear in-tier term. The literal worked
//! example in the core specification (`max = 100` yields `356`) only
//! reproduces if the bucket-count accumulator is *not* rolled back
//! alongside the threshold during that undo step; this implementation
//! preserves that behaviour rather than the more symmetric undo a
//! literal reading of the prose would suggest, because the document's
//! own worked example is the authority on the intended arithmetic.

use crate::config::PaddingProfile;

/// Compute the padded bucket count `sum` for a secure index whose
/// largest input document is `max` bytes.
///
/// `max` beyond the profile's top tier is capped: the walk stops once
/// it exhausts the staircase rather than extrapolating past it, and
/// the bucket count is the sum of every tier's increment with no
/// further linear term.
pub fn bucket_count(profile: &PaddingProfile, max: u64) -> u64 {
    let tiers = profile.thresholds.len();
    let mut threshold = 0u64;
    let mut sum = 0u64;
    let mut i = 0usize;

    while i < tiers && threshold <= max {
        threshold += profile.thresholds[i];
        sum += profile.increments[i];
        i += 1;
    }

    if i == tiers && threshold <= max {
        // max exceeds every tier in the table; cap rather than extend it.
        return sum;
    }

    // i >= 1 here: the first tier's threshold starts at 0, so the loop
    // always runs at least once for any max >= 0.
    let last_tier = i - 1;
    threshold -= profile.thresholds[last_tier];
    sum + (max - threshold) / i as u64
}
