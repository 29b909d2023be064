#![cfg(feature = "map")]
//! Unit tests for AssociativeMap.
//!
//! Covers the public API: insertion and overwrite, lookup, removal,
//! rehashing, clearing, configuration and iteration.

use corral::collections::{
    AssociativeMap, CollectionError, DEFAULT_BUCKET_COUNT, DEFAULT_LOAD_FACTOR_THRESHOLD,
    MapConfig,
};
use rstest::rstest;
use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

/// Hashes every key to zero so that all entries share one chain.
#[derive(Default)]
struct ConstantHasher;

impl Hasher for ConstantHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

type CollidingMap<K, V> = AssociativeMap<K, V, BuildHasherDefault<ConstantHasher>>;

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map: AssociativeMap<String, i32> = AssociativeMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map.bucket_count(), DEFAULT_BUCKET_COUNT);
    assert!(map.load_factor().abs() < f64::EPSILON);
}

#[rstest]
fn test_default_creates_empty_map() {
    let map: AssociativeMap<String, i32> = AssociativeMap::default();
    assert!(map.is_empty());
    assert_eq!(map.config(), &MapConfig::default());
}

#[rstest]
fn test_try_with_config_uses_initial_bucket_count() {
    let config = MapConfig::new().with_initial_bucket_count(4);
    let map: AssociativeMap<i32, i32> = AssociativeMap::try_with_config(config).unwrap();
    assert_eq!(map.bucket_count(), 4);
    assert!((map.config().load_factor_threshold() - DEFAULT_LOAD_FACTOR_THRESHOLD).abs() < f64::EPSILON);
}

#[rstest]
#[case::zero_buckets(MapConfig::new().with_initial_bucket_count(0), "initial_bucket_count")]
#[case::zero_threshold(MapConfig::new().with_load_factor_threshold(0.0), "load_factor_threshold")]
#[case::negative_threshold(MapConfig::new().with_load_factor_threshold(-1.0), "load_factor_threshold")]
#[case::nan_threshold(MapConfig::new().with_load_factor_threshold(f64::NAN), "load_factor_threshold")]
fn test_try_with_config_rejects_invalid_config(
    #[case] config: MapConfig,
    #[case] expected_parameter: &str,
) {
    let result: Result<AssociativeMap<i32, i32>, _> = AssociativeMap::try_with_config(config);
    match result {
        Err(CollectionError::InvalidConfiguration { parameter, .. }) => {
            assert_eq!(parameter, expected_parameter);
        }
        other => panic!("expected InvalidConfiguration, got {other:?}"),
    }
}

// =============================================================================
// Put and Get Tests
// =============================================================================

#[rstest]
fn test_put_then_get_returns_value() {
    let mut map = AssociativeMap::new();
    assert_eq!(map.put("test".to_string(), 1), None);
    assert_eq!(map.get("test"), Some(&1));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_put_existing_key_overwrites_without_growing() {
    let mut map = AssociativeMap::new();
    map.put("test", 1);
    assert_eq!(map.put("test", 2), Some(1));

    assert_eq!(map.get("test"), Some(&2));
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_get_absent_key_returns_none() {
    let mut map = AssociativeMap::new();
    map.put(1, "one");
    assert_eq!(map.get(&2), None);
    assert!(!map.contains_key(&2));
    assert!(map.contains_key(&1));
}

#[rstest]
fn test_get_mut_updates_value_in_place() {
    let mut map = AssociativeMap::new();
    map.put("counter", 0);
    if let Some(value) = map.get_mut("counter") {
        *value += 5;
    }
    assert_eq!(map.get("counter"), Some(&5));
    assert_eq!(map.get_mut("missing"), None);
}

#[rstest]
fn test_empty_string_key() {
    let mut map = AssociativeMap::new();
    map.put(String::new(), 42);
    assert_eq!(map.get(""), Some(&42));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_returns_value_and_decrements_len() {
    let mut map = AssociativeMap::new();
    map.put("a", 1);
    map.put("b", 2);

    assert_eq!(map.remove("a"), Some(1));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), None);
    assert_eq!(map.get("b"), Some(&2));
}

#[rstest]
fn test_remove_absent_key_leaves_map_unchanged() {
    let mut map: AssociativeMap<i32, i32> = (0..5).map(|key| (key, key)).collect();
    assert_eq!(map.remove(&10), None);
    assert_eq!(map.len(), 5);
}

#[rstest]
fn test_remove_on_empty_map_returns_none() {
    let mut map: AssociativeMap<i32, i32> = AssociativeMap::new();
    assert_eq!(map.remove(&1), None);
}

// =============================================================================
// Collision Tests
// =============================================================================

#[rstest]
fn test_colliding_keys_are_all_retrievable() {
    let mut map: CollidingMap<i32, i32> = CollidingMap::default();
    for key in 0..10 {
        map.put(key, key * 100);
    }

    assert_eq!(map.len(), 10);
    for key in 0..10 {
        assert_eq!(map.get(&key), Some(&(key * 100)));
    }
}

#[rstest]
#[case::first(0)]
#[case::middle(4)]
#[case::last(9)]
fn test_remove_from_shared_chain_keeps_neighbours(#[case] removed: i32) {
    let mut map: CollidingMap<i32, i32> = CollidingMap::default();
    for key in 0..10 {
        map.put(key, key);
    }

    assert_eq!(map.remove(&removed), Some(removed));

    let remaining: Vec<i32> = map.keys().copied().collect();
    let expected: Vec<i32> = (0..10).filter(|key| *key != removed).collect();
    assert_eq!(remaining, expected);
}

// =============================================================================
// Rehash Tests
// =============================================================================

#[rstest]
fn test_rehash_happens_when_threshold_would_be_exceeded() {
    let mut map = AssociativeMap::new();
    for key in 0..12 {
        map.put(key, key);
    }
    // 12 / 16 == 0.75 is not above the threshold
    assert_eq!(map.bucket_count(), 16);

    map.put(12, 12);
    assert_eq!(map.bucket_count(), 32);
    assert_eq!(map.len(), 13);
}

#[rstest]
fn test_entries_survive_many_rehashes() {
    const COUNT: i32 = 10_000;

    let map: AssociativeMap<i32, i32> = (0..COUNT).map(|key| (key, key * 2)).collect();

    assert_eq!(map.len(), COUNT as usize);
    assert!(map.load_factor() <= DEFAULT_LOAD_FACTOR_THRESHOLD);
    for key in 0..COUNT {
        assert_eq!(map.get(&key), Some(&(key * 2)), "failed to get key {key}");
    }
}

#[rstest]
fn test_remove_never_shrinks_buckets() {
    let mut map: AssociativeMap<i32, i32> = (0..100).map(|key| (key, key)).collect();
    let grown = map.bucket_count();
    for key in 0..100 {
        map.remove(&key);
    }
    assert!(map.is_empty());
    assert_eq!(map.bucket_count(), grown);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[rstest]
fn test_clear_resets_to_configured_bucket_count() {
    let config = MapConfig::new().with_initial_bucket_count(8);
    let mut map = AssociativeMap::try_with_config(config).unwrap();
    for key in 0..100 {
        map.put(key, key);
    }
    assert!(map.bucket_count() > 8);

    map.clear();
    assert_eq!(map.len(), 0);
    assert_eq!(map.bucket_count(), 8);
    assert_eq!(map.get(&1), None);

    map.put(1, 1);
    assert_eq!(map.get(&1), Some(&1));
}

// =============================================================================
// Iteration Tests
// =============================================================================

#[rstest]
fn test_iter_visits_every_entry_once() {
    let map: AssociativeMap<String, usize> =
        (0..500).map(|index| (format!("key_{index}"), index)).collect();

    let collected: HashMap<String, usize> = map
        .iter()
        .map(|(key, value)| (key.clone(), *value))
        .collect();

    assert_eq!(collected.len(), 500);
    assert_eq!(map.iter().len(), 500);
    for (key, value) in &collected {
        assert_eq!(map.get(key), Some(value));
    }
}

#[rstest]
fn test_iter_is_restartable() {
    let map: AssociativeMap<i32, i32> = (0..20).map(|key| (key, key)).collect();
    let first: Vec<(&i32, &i32)> = map.iter().collect();
    let second: Vec<(&i32, &i32)> = map.iter().collect();
    assert_eq!(first, second);
}

#[rstest]
fn test_into_iter_yields_owned_entries() {
    let map: AssociativeMap<String, i32> =
        [("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();

    let mut entries: Vec<(String, i32)> = map.into_iter().collect();
    entries.sort();
    assert_eq!(entries, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
}

#[rstest]
fn test_values_mut_through_iter_mut() {
    let mut map: AssociativeMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    for (_, value) in &mut map {
        *value *= 2;
    }
    let total: i32 = map.values().sum();
    assert_eq!(total, 90);
}

// =============================================================================
// Equality and Formatting Tests
// =============================================================================

#[rstest]
fn test_equality_ignores_bucket_layout() {
    let small = MapConfig::new().with_initial_bucket_count(3);
    let mut grown = AssociativeMap::try_with_config(small).unwrap();
    let mut fresh = AssociativeMap::new();
    for key in (0..30).rev() {
        grown.put(key, key);
    }
    for key in 0..30 {
        fresh.put(key, key);
    }
    assert_ne!(grown.bucket_count(), fresh.bucket_count());
    assert_eq!(grown, fresh);

    fresh.put(0, 99);
    assert_ne!(grown, fresh);
}

#[rstest]
fn test_debug_formats_as_map() {
    let mut map = AssociativeMap::new();
    map.put("only", 1);
    assert_eq!(format!("{map:?}"), r#"{"only": 1}"#);
}
