//! The literal end-to-end scenarios from the core specification's
//! Testable Properties section (§8): S1 through S6, reproduced
//! verbatim against the real crates rather than mocked components.

#[cfg(test)]
mod tests {
    use sse_client::Client;
    use sse_crypto::envelope::Keychain;
    use sse_indexer::Indexer;
    use sse_multiuser::{MultiUserServer, Owner, Reader};
    use sse_server::Server;
    use sse_types::DocumentSketch;
    use x25519_dalek::{PublicKey, StaticSecret};

    fn keypair() -> (StaticSecret, PublicKey) {
        let secret = StaticSecret::random_from_rng(rand::thread_rng());
        let public = PublicKey::from(&secret);
        (secret, public)
    }

    /// S1: index one document with id "doc1" containing text
    /// "Hello, hello WORLD". Sketch must be
    /// `{id:"doc1", list:{hello:2, world:1}}`, `size=18`.
    fn s1_sketch() -> DocumentSketch {
        let mut indexer = Indexer::new("doc1");
        indexer.feed(b"Hello, hello WORLD");
        assert_eq!(indexer.size(), 18);
        let sketch = indexer.finalize();

        assert_eq!(sketch.id, "doc1");
        assert_eq!(sketch.list.get("hello"), Some(&2));
        assert_eq!(sketch.list.get("world"), Some(&1));
        assert_eq!(sketch.list.len(), 2);
        sketch
    }

    #[test]
    fn s1_indexer_produces_the_expected_sketch() {
        s1_sketch();
    }

    /// S2: with the S1 sketch and `max = 100`, `secureIndex("dA", 100,
    /// sketch)` yields a secure index whose bucket count is exactly 356.
    #[test]
    fn s2_secure_index_bucket_count_is_356() {
        let sketch = s1_sketch();
        let mut client = Client::new();
        let index = client.secure_index("dA".to_string(), 100, &[sketch]).unwrap();
        assert_eq!(index.index.len(), 356);
    }

    /// S3: a query on "world" against a server holding that secure
    /// index returns `["doc1", opse(1)]`.
    #[test]
    fn s3_world_query_returns_doc1() {
        let sketch = s1_sketch();
        let mut client = Client::new();
        let index = client.secure_index("dA".to_string(), 100, &[sketch]).unwrap();

        let mut server = Server::new();
        server.update("dA".to_string(), index, &[]).unwrap();

        let query = client.create_query("world");
        let hits = server.search(&query);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "doc1");
    }

    /// S4: updating the same server with a smaller new index under
    /// name "dB" and `reps=[]` returns `["dA", ["doc1"]]` and does not
    /// install "dB".
    #[test]
    fn s4_smaller_update_is_rejected_as_a_merge_request() {
        let sketch = s1_sketch();
        let mut client = Client::new();
        let index = client.secure_index("dA".to_string(), 100, &[sketch]).unwrap();

        let mut server = Server::new();
        server.update("dA".to_string(), index, &[]).unwrap();

        let mut smaller_client = Client::new();
        let smaller_index = smaller_client.secure_index("dB".to_string(), 1, &[]).unwrap();
        assert!(smaller_index.docs.is_empty());

        let err = server.update("dB".to_string(), smaller_index, &[]).unwrap_err();
        let merge_request = match err {
            sse_server::ServerError::GrowthViolation(request) => request,
            other => panic!("expected a growth violation, got {other:?}"),
        };

        assert_eq!(merge_request.domain, "dA");
        assert_eq!(merge_request.docs, vec!["doc1".to_string()]);
        assert!(!server.domains().contains_key("dB"));
    }

    struct MultiUserFixture {
        owner_client: Client,
        owner: Owner,
        reader: Reader,
        server: MultiUserServer,
    }

    fn multi_user_fixture() -> MultiUserFixture {
        let (reader_secret, reader_public) = keypair();
        let (server_secret, server_public) = keypair();

        let owner_client = Client::new();

        let mut owner_keychain = Keychain::new();
        owner_keychain.public.insert("alice".to_string(), reader_public);
        owner_keychain.public.insert("server".to_string(), server_public);
        let owner = Owner::new(owner_keychain, "server");

        let mut reader_keychain = Keychain::new();
        reader_keychain.private.insert("alice".to_string(), reader_secret);
        let reader = Reader::new("alice", reader_keychain);

        let mut server_keychain = Keychain::new();
        server_keychain.private.insert("server".to_string(), server_secret);
        let server = MultiUserServer::new("server", server_keychain, Server::new());

        MultiUserFixture { owner_client, owner, reader, server }
    }

    /// S5: in the multi-user mode, after `owner.state()` is installed,
    /// a reader's `createQuery(state, "world")` decrypts on the server
    /// to the same inner trapdoors as the single-user `createQuery`
    /// would produce, and the result equals S3's.
    #[test]
    fn s5_multi_user_query_matches_single_user_search_result() {
        let sketch = s1_sketch();
        let MultiUserFixture { mut owner_client, owner, mut reader, mut server } = multi_user_fixture();

        let index = owner_client.secure_index("dA".to_string(), 100, &[sketch]).unwrap();
        server.update("dA".to_string(), index, &[]).unwrap();

        let packed = owner.pack_keys(&owner_client).unwrap();
        reader.unpack_keys(&packed).unwrap();

        let state = owner.state();
        server.state(&state).unwrap();

        let wrapped_query = reader.create_query(&state, "world").unwrap();
        let hits = server.search(&wrapped_query).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "doc1");
    }

    /// S6: `packKeys` followed by `unpackKeys` by an authorised reader
    /// restores a keyring that produces the same trapdoors as the
    /// owner's.
    #[test]
    fn s6_unpacked_keyring_matches_owner_trapdoors() {
        let sketch = s1_sketch();
        let MultiUserFixture { mut owner_client, owner, mut reader, .. } = multi_user_fixture();
        owner_client.secure_index("dA".to_string(), 100, &[sketch]).unwrap();

        let packed = owner.pack_keys(&owner_client).unwrap();
        reader.unpack_keys(&packed).unwrap();

        assert_eq!(reader.inner_query("world"), owner_client.create_query("world"));
    }
}
