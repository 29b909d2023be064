#![cfg(feature = "map")]
//! Property-based tests for AssociativeMap.
//!
//! This module verifies that AssociativeMap behaves like a model map
//! across arbitrary operation sequences, including those that force
//! rehashing and bucket collisions.

use corral::collections::{AssociativeMap, MapConfig};
use proptest::prelude::*;
use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

/// Keeps only the low three bits of the hash so that chains grow long.
#[derive(Default)]
struct CoarseHasher(u64);

impl Hasher for CoarseHasher {
    fn finish(&self) -> u64 {
        self.0 & 0b111
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.wrapping_mul(31).wrapping_add(u64::from(*byte));
        }
    }
}

type CoarseMap<K, V> = AssociativeMap<K, V, BuildHasherDefault<CoarseHasher>>;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_key() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn arbitrary_entries() -> impl Strategy<Value = Vec<(String, i32)>> {
    prop::collection::vec((arbitrary_key(), any::<i32>()), 0..200)
}

#[derive(Debug, Clone)]
enum Operation {
    Put(u16, i32),
    Remove(u16),
    Clear,
}

fn arbitrary_operations() -> impl Strategy<Value = Vec<Operation>> {
    let operation = prop_oneof![
        6 => (0..64_u16, any::<i32>()).prop_map(|(key, value)| Operation::Put(key, value)),
        3 => (0..64_u16).prop_map(Operation::Remove),
        1 => Just(Operation::Clear),
    ];
    prop::collection::vec(operation, 0..300)
}

// =============================================================================
// Get-Put Law: after put(k, v), get(&k) == Some(&v)
// =============================================================================

proptest! {
    #[test]
    fn prop_get_put_law(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in any::<i32>()
    ) {
        let mut map: AssociativeMap<String, i32> = entries.into_iter().collect();
        map.put(key.clone(), value);

        prop_assert_eq!(map.get(&key), Some(&value));
    }
}

// =============================================================================
// Put-Returns-Previous Law: put returns what get returned before it
// =============================================================================

proptest! {
    #[test]
    fn prop_put_returns_previous_value(
        entries in arbitrary_entries(),
        key in arbitrary_key(),
        value in any::<i32>()
    ) {
        let mut map: AssociativeMap<String, i32> = entries.into_iter().collect();
        let before = map.get(&key).copied();

        prop_assert_eq!(map.put(key, value), before);
    }
}

// =============================================================================
// Remove-Get Law: after remove(&k), get(&k) == None
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_get_law(
        entries in arbitrary_entries(),
        key in arbitrary_key()
    ) {
        let mut map: AssociativeMap<String, i32> = entries.into_iter().collect();
        let length_before = map.len();
        let removed = map.remove(&key);

        prop_assert_eq!(map.get(&key), None);
        prop_assert_eq!(map.len(), length_before - usize::from(removed.is_some()));
    }
}

// =============================================================================
// Length Law: len equals the number of distinct keys inserted
// =============================================================================

proptest! {
    #[test]
    fn prop_len_counts_distinct_keys(entries in arbitrary_entries()) {
        let map: AssociativeMap<String, i32> = entries.iter().cloned().collect();
        let model: HashMap<String, i32> = entries.into_iter().collect();

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.iter().count(), model.len());
    }
}

// =============================================================================
// Load Factor Law: the threshold holds after every put
// =============================================================================

proptest! {
    #[test]
    fn prop_load_factor_never_exceeds_threshold(
        initial_bucket_count in 1_usize..32,
        threshold in 1.0_f64..2.0,
        keys in prop::collection::vec(any::<u32>(), 0..300)
    ) {
        let config = MapConfig::new()
            .with_initial_bucket_count(initial_bucket_count)
            .with_load_factor_threshold(threshold);
        let mut map = AssociativeMap::try_with_config(config).unwrap();

        for key in keys {
            map.put(key, ());
            prop_assert!(map.load_factor() <= threshold);
        }
    }
}

// =============================================================================
// Resize Preservation Law: rehashing keeps every entry reachable
// =============================================================================

proptest! {
    #[test]
    fn prop_rehash_preserves_entries(entries in arbitrary_entries()) {
        let config = MapConfig::new().with_initial_bucket_count(1);
        let mut map = AssociativeMap::try_with_config(config).unwrap();
        let mut model = HashMap::new();

        for (key, value) in entries {
            map.put(key.clone(), value);
            model.insert(key, value);
        }

        prop_assert_eq!(map.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }
}

// =============================================================================
// Model Law: any operation sequence matches std HashMap
// =============================================================================

proptest! {
    #[test]
    fn prop_operations_match_model(operations in arbitrary_operations()) {
        let mut map: CoarseMap<u16, i32> = CoarseMap::default();
        let mut model: HashMap<u16, i32> = HashMap::new();

        for operation in operations {
            match operation {
                Operation::Put(key, value) => {
                    prop_assert_eq!(map.put(key, value), model.insert(key, value));
                }
                Operation::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
                Operation::Clear => {
                    map.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(map.len(), model.len());
        }

        for key in 0..64_u16 {
            prop_assert_eq!(map.get(&key), model.get(&key));
        }
    }
}

// =============================================================================
// Equality Law: maps built from the same entries in any order are equal
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_is_order_independent(entries in prop::collection::vec((any::<u8>(), any::<i32>()), 0..100)) {
        let model: HashMap<u8, i32> = entries.into_iter().collect();
        let mut ordered: Vec<(u8, i32)> = model.iter().map(|(key, value)| (*key, *value)).collect();
        ordered.sort_unstable();

        let forward: AssociativeMap<u8, i32> = ordered.iter().copied().collect();
        let backward: AssociativeMap<u8, i32> = ordered.iter().rev().copied().collect();

        prop_assert_eq!(forward, backward);
    }
}
