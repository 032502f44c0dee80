//! Cryptographically uniform shuffling of a secure index's buckets
//! (§4.2.2 step 8).

use indexmap::IndexMap;
use rand::RngCore;
use sse_types::{BucketKey, SecureEntry};

/// Draw an unbiased index in `[0, len)` by rejection sampling: read
/// just enough random bytes to cover `len - 1`, zero-pad to a 32-bit
/// little-endian value, and reject draws that land at or beyond
/// `len`.
fn unbiased_index(len: usize, rng: &mut impl RngCore) -> usize {
    if len <= 1 {
        return 0;
    }
    let bits_needed = usize::BITS - (len - 1).leading_zeros();
    let bytes_needed = ((bits_needed + 7) / 8).max(1) as usize;

    loop {
        let mut buf = [0u8; 4];
        rng.fill_bytes(&mut buf[..bytes_needed]);
        let draw = u32::from_le_bytes(buf) as usize;
        if draw < len {
            return draw;
        }
    }
}

/// Produce a fresh `IndexMap` holding `entries` in a cryptographically
/// uniform random order (Fisher-Yates driven by [`unbiased_index`]).
pub fn shuffle(mut entries: Vec<(BucketKey, SecureEntry)>, rng: &mut impl RngCore) -> IndexMap<BucketKey, SecureEntry> {
    let len = entries.len();
    for i in (1..len).rev() {
        let j = unbiased_index(i + 1, rng);
        entries.swap(i, j);
    }
    let mut map = IndexMap::with_capacity(len);
    for (key, entry) in entries {
        map.insert(key, entry);
    }
    map
}
