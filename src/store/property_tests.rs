//! Property-Based Tests for the Store Module
//!
//! Uses proptest to verify the store contract and the glob matcher over
//! generated inputs.

use proptest::prelude::*;

use crate::key::{CacheKey, CallerIdentity};
use crate::store::{key_matches, MemoryStore, Store};

// == Strategies ==
/// Generates store keys without glob metacharacters.
fn plain_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:/_.-]{1,64}"
}

/// Generates arbitrary binary values of bounded size.
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a value under a key and reading it back before expiry
    // returns exactly the stored bytes.
    #[test]
    fn prop_roundtrip_storage(key in plain_key_strategy(), value in value_strategy()) {
        block_on(async {
            let store = MemoryStore::new();

            store.set(&key, value.clone(), 300).await.unwrap();
            let retrieved = store.get(&key).await.unwrap();

            prop_assert_eq!(retrieved, Some(value));
            Ok(())
        })?;
    }

    // A second set on the same key fully replaces the first value and
    // never leaves two live entries.
    #[test]
    fn prop_overwrite_semantics(
        key in plain_key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        block_on(async {
            let store = MemoryStore::new();

            store.set(&key, value1, 300).await.unwrap();
            store.set(&key, value2.clone(), 300).await.unwrap();

            prop_assert_eq!(store.get(&key).await.unwrap(), Some(value2));
            prop_assert_eq!(store.len().await, 1);
            Ok(())
        })?;
    }

    // Deleting with a prefix-star pattern removes exactly the keys under
    // that prefix.
    #[test]
    fn prop_prefix_pattern_deletion(
        prefix in "[a-z]{1,10}",
        suffixes in prop::collection::hash_set("[a-z0-9/]{1,16}", 1..8),
        others in prop::collection::hash_set("Z[a-zA-Z0-9/]{1,16}", 0..8)
    ) {
        block_on(async {
            let store = MemoryStore::new();

            for suffix in &suffixes {
                store.set(&format!("{}:{}", prefix, suffix), b"m".to_vec(), 300).await.unwrap();
            }
            // `others` start with an uppercase Z, the lowercase prefix can
            // never match them.
            for other in &others {
                store.set(other, b"o".to_vec(), 300).await.unwrap();
            }

            let removed = store.delete_pattern(&format!("{}*", prefix)).await.unwrap();

            prop_assert_eq!(removed as usize, suffixes.len());
            for suffix in &suffixes {
                let key = format!("{}:{}", prefix, suffix);
                prop_assert!(store.get(&key).await.unwrap().is_none());
            }
            for other in &others {
                prop_assert!(store.get(other).await.unwrap().is_some());
            }
            Ok(())
        })?;
    }

    // A pattern without metacharacters matches only the identical key.
    #[test]
    fn prop_literal_pattern_is_equality(
        a in plain_key_strategy(),
        b in plain_key_strategy()
    ) {
        prop_assert!(key_matches(&a, &a));
        prop_assert_eq!(key_matches(&a, &b), a == b);
    }

    // A trailing star behaves as a prefix match on meta-free inputs.
    #[test]
    fn prop_trailing_star_is_prefix(
        prefix in plain_key_strategy(),
        key in plain_key_strategy()
    ) {
        let pattern = format!("{}*", prefix);
        prop_assert_eq!(key_matches(&pattern, &key), key.starts_with(&prefix));
    }

    // Key derivation is deterministic and separates identities.
    #[test]
    fn prop_key_derivation(
        user_a in "[a-zA-Z0-9]{1,16}",
        user_b in "[a-zA-Z0-9]{1,16}",
        path in "/[a-z]{1,8}/[a-z]{1,8}"
    ) {
        let uri: axum::http::Uri = path.parse().unwrap();

        let key_a1 = CacheKey::derive(&CallerIdentity::new(user_a.clone()), &uri);
        let key_a2 = CacheKey::derive(&CallerIdentity::new(user_a.clone()), &uri);
        let key_b = CacheKey::derive(&CallerIdentity::new(user_b.clone()), &uri);

        prop_assert_eq!(&key_a1, &key_a2);
        prop_assert_eq!(key_a1 == key_b, user_a == user_b);
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    // An entry stored with a TTL stops being served once the TTL elapses.
    #[test]
    fn prop_ttl_expiration(key in plain_key_strategy(), value in value_strategy()) {
        block_on(async {
            let store = MemoryStore::new();

            store.set(&key, value.clone(), 1).await.unwrap();
            prop_assert_eq!(store.get(&key).await.unwrap(), Some(value));

            tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

            prop_assert_eq!(store.get(&key).await.unwrap(), None);
            Ok(())
        })?;
    }
}
