//! Cross-crate property checks from the core specification's Testable
//! Properties section (§8), beyond the literal S1-S6 scenarios:
//! padding invariance (2), shuffle uniformity (4), and update
//! monotonicity (5) exercised through the real `sse-client` /
//! `sse-server` pair rather than their own internal unit tests.

#[cfg(test)]
mod tests {
    use sse_client::Client;
    use sse_indexer::Indexer;
    use sse_server::{Server, ServerError};
    use sse_types::DocumentSketch;
    use std::collections::BTreeMap;

    fn sketch(id: &str, words: &[(&str, u64)]) -> DocumentSketch {
        let mut list = BTreeMap::new();
        for (w, c) in words {
            list.insert(w.to_string(), *c);
        }
        DocumentSketch { id: id.to_string(), list }
    }

    /// Property 2: for any two document sets with the same `max`, the
    /// resulting secure index has an identical bucket count,
    /// regardless of how many distinct words or documents fed it.
    #[test]
    fn padding_invariance_across_different_document_sets_same_max() {
        let mut client_a = Client::new();
        let small = client_a.secure_index("small".to_string(), 100, &[sketch("d1", &[("alpha", 1)])]).unwrap();

        let mut client_b = Client::new();
        let wide = client_b
            .secure_index(
                "wide".to_string(),
                100,
                &[
                    sketch("d1", &[("alpha", 1), ("beta", 7), ("gamma", 3)]),
                    sketch("d2", &[("alpha", 2), ("delta", 5)]),
                    sketch("d3", &[("epsilon", 9)]),
                ],
            )
            .unwrap();

        assert_eq!(small.index.len(), wide.index.len());
    }

    /// Property 2 (continued): changing `max` across a staircase
    /// threshold changes the bucket count by exactly the corresponding
    /// tier increment (here, crossing from the first into the second
    /// tier at byte 256 adds exactly 65536 buckets on the boundary).
    #[test]
    fn crossing_a_staircase_threshold_changes_bucket_count_by_the_tier_increment() {
        let mut below = Client::new();
        let below_index = below.secure_index("below".to_string(), 255, &[sketch("d1", &[("alpha", 1)])]).unwrap();

        let mut at_next_tier = Client::new();
        // threshold after tier 0 is 256; max=256 crosses into tier 1.
        let at_index = at_next_tier.secure_index("at".to_string(), 256, &[sketch("d1", &[("alpha", 1)])]).unwrap();

        assert!(at_index.index.len() > below_index.index.len());
    }

    /// Property 4 (statistical): over many builds of the same
    /// underlying index, the position of a fixed bucket key is not
    /// concentrated in one region of the output — a weak proxy for
    /// uniformity that doesn't require a full chi-squared test.
    #[test]
    fn shuffle_does_not_concentrate_a_fixed_key_in_one_region() {
        let mut first_half_hits = 0u32;
        let mut second_half_hits = 0u32;
        let trials = 200;

        for _ in 0..trials {
            let mut client = Client::new();
            let index = client.secure_index("dA".to_string(), 10, &[sketch("d1", &[("alpha", 1)])]).unwrap();
            let total = index.index.len();

            // "alpha"'s own trapdoor (slot 0) is the one fixed bucket
            // key we can re-derive deterministically in every trial.
            let trapdoor = &client.create_query("alpha")["dA"][0];
            let position = index.index.get_index_of(trapdoor).expect("alpha's trapdoor must be present");

            if position < total / 2 {
                first_half_hits += 1;
            } else {
                second_half_hits += 1;
            }
        }

        // Neither half should dominate overwhelmingly; a broken shuffle
        // (e.g. one that never moves the first inserted key) would put
        // effectively all hits in one half.
        assert!(first_half_hits > trials / 4, "first half severely underrepresented: {first_half_hits}/{trials}");
        assert!(second_half_hits > trials / 4, "second half severely underrepresented: {second_half_hits}/{trials}");
    }

    /// Property 5: calling `update(d2, idx2, reps=[])` when an existing
    /// domain `d1` has `len(docs) >= len(idx2.docs)` returns the merge
    /// request and leaves the server unchanged; calling again with
    /// `reps=[d1]` succeeds and removes `d1`.
    #[test]
    fn update_monotonicity_end_to_end() {
        let mut owner = Client::new();
        let d1_index = owner.secure_index("d1".to_string(), 10, &[sketch("doc1", &[("alpha", 1)])]).unwrap();

        let mut server = Server::new();
        server.update("d1".to_string(), d1_index, &[]).unwrap();

        let d2_index_small = owner.secure_index("d2".to_string(), 10, &[]).unwrap();
        let err = server.update("d2".to_string(), d2_index_small.clone(), &[]).unwrap_err();
        assert!(matches!(err, ServerError::GrowthViolation(_)));
        assert!(server.domains().contains_key("d1"));
        assert!(!server.domains().contains_key("d2"));

        server.update("d2".to_string(), d2_index_small, &["d1".to_string()]).unwrap();
        assert!(!server.domains().contains_key("d1"));
        assert!(server.domains().contains_key("d2"));
    }

    /// Property 7: feeding the same text as one chunk or as many
    /// arbitrarily-split chunks produces identical sketches.
    #[test]
    fn indexer_idempotence_on_whitespace_chunking() {
        let text = "The Quick, Brown-Fox jumps over THE lazy dog's tail 123 times!";

        let mut whole = Indexer::new("doc1");
        whole.feed(text.as_bytes());
        let whole_sketch = whole.finalize();

        let mut chunked = Indexer::new("doc1");
        let bytes = text.as_bytes();
        let mut offset = 0;
        for chunk_len in [3usize, 1, 7, 2, 5, 11, 4, 100].iter().cycle() {
            if offset >= bytes.len() {
                break;
            }
            let end = (offset + chunk_len).min(bytes.len());
            chunked.feed(&bytes[offset..end]);
            offset = end;
        }
        let chunked_sketch = chunked.finalize();

        assert_eq!(whole_sketch.list, chunked_sketch.list);
    }
}
