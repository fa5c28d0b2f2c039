//! Property tests for set intersection and dump round trips

use std::collections::HashSet;

use proptest::prelude::*;
use scour::util::{OrderedSet, intersect};
use scour::{Document, EngineConfig, SearchEngine};
use serde_json::json;

fn set_strategy() -> impl Strategy<Value = OrderedSet<u8>> {
    prop::collection::vec(0u8..32, 0..16).prop_map(|items| items.into_iter().collect())
}

fn as_hash_set(set: &OrderedSet<u8>) -> HashSet<u8> {
    set.iter().copied().collect()
}

const WORDS: &[&str] = &["lorem", "ipsum", "dolor", "sit", "amet", "elitr", "sed", "diam"];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..6).prop_map(|words| words.join(" "))
}

fn documents_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(text_strategy(), 0..12).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| json!({ "id": i, "text": text }))
            .collect()
    })
}

proptest! {
    #[test]
    fn intersect_single_set_is_identity(a in set_strategy()) {
        let result = intersect(&[Some(&a)]);
        prop_assert_eq!(result.as_slice(), a.as_slice());
    }

    #[test]
    fn intersect_is_idempotent(a in set_strategy()) {
        let result = intersect(&[Some(&a), Some(&a)]);
        prop_assert_eq!(result.as_slice(), a.as_slice());
    }

    #[test]
    fn intersect_is_commutative(a in set_strategy(), b in set_strategy()) {
        let ab = intersect(&[Some(&a), Some(&b)]);
        let ba = intersect(&[Some(&b), Some(&a)]);
        prop_assert_eq!(ab.as_ref(), ba.as_ref());
    }

    #[test]
    fn intersect_is_associative(a in set_strategy(), b in set_strategy(), c in set_strategy()) {
        let ab = intersect(&[Some(&a), Some(&b)]).into_owned();
        let bc = intersect(&[Some(&b), Some(&c)]).into_owned();
        let left = intersect(&[Some(&ab), Some(&c)]);
        let right = intersect(&[Some(&a), Some(&bc)]);
        prop_assert_eq!(left.as_ref(), right.as_ref());
    }

    #[test]
    fn intersect_matches_hash_set_intersection(a in set_strategy(), b in set_strategy()) {
        let expected: HashSet<u8> = as_hash_set(&a).intersection(&as_hash_set(&b)).copied().collect();
        let result = intersect(&[Some(&a), Some(&b)]);
        prop_assert_eq!(as_hash_set(&result), expected);
    }

    #[test]
    fn intersect_with_missing_set_is_empty(a in set_strategy(), b in set_strategy()) {
        prop_assert!(intersect(&[Some(&a), None, Some(&b)]).is_empty());
    }

    #[test]
    fn hydrate_dump_preserves_results(docs in documents_strategy(), query in text_strategy()) {
        let config = EngineConfig::builder().field("text").build();
        let mut engine = SearchEngine::new(config.clone());
        engine.add(docs.clone()).unwrap();

        let mut restored = SearchEngine::new(config);
        restored.hydrate(engine.dump(), docs).unwrap();

        prop_assert_eq!(restored.search(&query).unwrap(), engine.search(&query).unwrap());
        prop_assert_eq!(restored.dump(), engine.dump());
    }

    #[test]
    fn every_hit_contains_every_query_word(docs in documents_strategy(), query in text_strategy()) {
        let mut engine = SearchEngine::new(EngineConfig::builder().field("text").build());
        engine.add(docs).unwrap();

        for hit in engine.search(&query).unwrap() {
            let text = hit["text"].as_str().unwrap_or_default();
            let words: HashSet<&str> = text.split(' ').collect();
            for word in query.split_whitespace() {
                prop_assert!(words.contains(word));
            }
        }
    }
}
