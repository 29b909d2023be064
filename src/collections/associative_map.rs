//! Mutable hash map with separate chaining.
//!
//! This module provides [`AssociativeMap`], a key-value store that resolves
//! hash collisions by chaining entries into singly-linked lists, one list
//! per bucket.
//!
//! # Overview
//!
//! - O(1) expected `get`, `put`, `remove` and `contains_key`
//! - O(1) `len`, `is_empty` and `load_factor`
//! - The bucket array doubles whenever an insert would push the load factor
//!   past the configured threshold (0.75 by default)
//! - Buckets are never shrunk by `remove`; `clear` returns to the initial
//!   bucket count
//!
//! # Examples
//!
//! ```rust
//! use corral::collections::AssociativeMap;
//!
//! let mut map = AssociativeMap::new();
//! assert_eq!(map.put("one".to_string(), 1), None);
//! assert_eq!(map.put("two".to_string(), 2), None);
//!
//! // Overwriting returns the previous value
//! assert_eq!(map.put("one".to_string(), 100), Some(1));
//! assert_eq!(map.get("one"), Some(&100));
//!
//! assert_eq!(map.remove("two"), Some(2));
//! assert_eq!(map.len(), 1);
//! ```
//!
//! # Internal Structure
//!
//! ```text
//! buckets[0] -> (k3, v3) -> nil
//! buckets[1] -> nil
//! buckets[2] -> (k1, v1) -> (k7, v7) -> nil
//! ...
//! ```
//!
//! The bucket of a key is `hash(key) % bucket_count`. Within a bucket,
//! entries keep the order in which they were inserted.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::mem;

use super::error::CollectionError;
use super::hashing::DefaultHashBuilder;

// =============================================================================
// Constants
// =============================================================================

/// Number of buckets a map starts with, and returns to on `clear`.
pub const DEFAULT_BUCKET_COUNT: usize = 16;

/// Load factor above which the bucket array is doubled.
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Multiplier applied to the bucket count on every rehash.
const GROWTH_FACTOR: usize = 2;

// =============================================================================
// Configuration
// =============================================================================

/// Sizing parameters for an [`AssociativeMap`].
///
/// # Examples
///
/// ```rust
/// use corral::collections::{AssociativeMap, MapConfig};
///
/// let config = MapConfig::new()
///     .with_initial_bucket_count(4)
///     .with_load_factor_threshold(1.0);
/// let map: AssociativeMap<u32, &str> = AssociativeMap::try_with_config(config).unwrap();
/// assert_eq!(map.bucket_count(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    initial_bucket_count: usize,
    load_factor_threshold: f64,
}

impl MapConfig {
    /// Creates a configuration with 16 buckets and a 0.75 threshold.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_bucket_count: DEFAULT_BUCKET_COUNT,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
        }
    }

    /// Sets the number of buckets allocated on creation and after `clear`.
    #[must_use]
    pub const fn with_initial_bucket_count(mut self, initial_bucket_count: usize) -> Self {
        self.initial_bucket_count = initial_bucket_count;
        self
    }

    /// Sets the load factor that triggers a rehash.
    #[must_use]
    pub const fn with_load_factor_threshold(mut self, load_factor_threshold: f64) -> Self {
        self.load_factor_threshold = load_factor_threshold;
        self
    }

    /// Returns the number of buckets allocated on creation.
    #[inline]
    pub const fn initial_bucket_count(&self) -> usize {
        self.initial_bucket_count
    }

    /// Returns the load factor that triggers a rehash.
    #[inline]
    pub const fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    /// Checks that the configuration can back a map.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if the bucket count
    /// is zero or the threshold is not a positive finite number.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.initial_bucket_count == 0 {
            return Err(CollectionError::InvalidConfiguration {
                parameter: "initial_bucket_count",
                reason: "must be greater than 0",
            });
        }
        if !(self.load_factor_threshold.is_finite() && self.load_factor_threshold > 0.0) {
            return Err(CollectionError::InvalidConfiguration {
                parameter: "load_factor_threshold",
                reason: "must be a positive finite number",
            });
        }
        Ok(())
    }
}

impl Default for MapConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Entry Definition
// =============================================================================

/// A link in a bucket chain. Each entry owns its successor.
struct Entry<K, V> {
    key: K,
    value: V,
    next: Bucket<K, V>,
}

/// Head of a bucket chain.
type Bucket<K, V> = Option<Box<Entry<K, V>>>;

fn empty_buckets<K, V>(count: usize) -> Vec<Bucket<K, V>> {
    std::iter::repeat_with(|| None).take(count).collect()
}

/// Links `entry` after the last entry of the chain starting at `bucket`.
fn append_to_chain<K, V>(bucket: &mut Bucket<K, V>, entry: Box<Entry<K, V>>) {
    let mut cursor = bucket;
    while let Some(current) = cursor {
        cursor = &mut current.next;
    }
    *cursor = Some(entry);
}

/// Drops a chain front to back so long chains do not recurse.
fn unlink_chain<K, V>(mut chain: Bucket<K, V>) {
    while let Some(mut entry) = chain {
        chain = entry.next.take();
    }
}

/// Copies a chain front to back, tracking the tail of the copy.
fn clone_chain<K: Clone, V: Clone>(chain: &Bucket<K, V>) -> Bucket<K, V> {
    let mut copy = None;
    let mut tail = &mut copy;
    let mut source = chain.as_deref();
    while let Some(entry) = source {
        let node = tail.insert(Box::new(Entry {
            key: entry.key.clone(),
            value: entry.value.clone(),
            next: None,
        }));
        tail = &mut node.next;
        source = entry.next.as_deref();
    }
    copy
}

// =============================================================================
// AssociativeMap Definition
// =============================================================================

/// A mutable hash map using chained buckets and automatic rehashing.
///
/// Keys are compared with [`Eq`] and placed with the map's [`BuildHasher`]
/// `S`. The default hasher is [`DefaultHashBuilder`].
///
/// # Time Complexity
///
/// | Operation      | Expected | Worst case |
/// |----------------|----------|------------|
/// | `get`          | O(1)     | O(n)       |
/// | `put`          | O(1)*    | O(n)       |
/// | `remove`       | O(1)     | O(n)       |
/// | `contains_key` | O(1)     | O(n)       |
/// | `len`          | O(1)     | O(1)       |
/// | `clear`        | O(n)     | O(n)       |
///
/// \* amortized over rehashes.
///
/// # Thread Safety
///
/// The map is `Send` and `Sync` when its keys, values and hasher are, but
/// every mutating method takes `&mut self`; wrap the map in a lock to
/// share it between writers.
pub struct AssociativeMap<K, V, S = DefaultHashBuilder> {
    /// Bucket chains, indexed by `hash % buckets.len()`.
    buckets: Vec<Bucket<K, V>>,
    /// Number of entries across all chains.
    length: usize,
    config: MapConfig,
    hash_builder: S,
}

static_assertions::assert_impl_all!(AssociativeMap<String, i32>: Send, Sync);

impl<K, V> AssociativeMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map with 16 buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let map: AssociativeMap<String, i32> = AssociativeMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty map sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if `config` does not
    /// pass [`MapConfig::validate`].
    pub fn try_with_config(config: MapConfig) -> Result<Self, CollectionError> {
        Self::try_with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> AssociativeMap<K, V, S> {
    /// Creates an empty map that places keys with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut map = AssociativeMap::with_hasher(RandomState::new());
    /// map.put(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        let config = MapConfig::new();
        Self {
            buckets: empty_buckets(config.initial_bucket_count),
            length: 0,
            config,
            hash_builder,
        }
    }

    /// Creates an empty map sized by `config` that places keys with
    /// `hash_builder`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if `config` does not
    /// pass [`MapConfig::validate`].
    pub fn try_with_config_and_hasher(
        config: MapConfig,
        hash_builder: S,
    ) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self {
            buckets: empty_buckets(config.initial_bucket_count),
            length: 0,
            config,
            hash_builder,
        })
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the current number of buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let mut map = AssociativeMap::new();
    /// for key in 0..12 {
    ///     map.put(key, key);
    /// }
    /// assert_eq!(map.bucket_count(), 16);
    ///
    /// // 13 / 16 > 0.75
    /// map.put(12, 12);
    /// assert_eq!(map.bucket_count(), 32);
    /// ```
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / bucket_count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.length as f64 / self.buckets.len() as f64
    }

    /// Returns the configuration the map was created with.
    #[inline]
    pub const fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Returns a reference to the map's hash builder.
    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry and shrinks back to the initial bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let mut map = AssociativeMap::new();
    /// for key in 0..100 {
    ///     map.put(key, key);
    /// }
    /// map.clear();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.bucket_count(), 16);
    /// ```
    pub fn clear(&mut self) {
        let buckets = mem::replace(
            &mut self.buckets,
            empty_buckets(self.config.initial_bucket_count),
        );
        for chain in buckets {
            unlink_chain(chain);
        }
        tracing::trace!(removed = self.length, "cleared associative map");
        self.length = 0;
    }

    /// Returns an iterator over the entries, in bucket order and then chain
    /// order.
    ///
    /// The order carries no meaning beyond being stable between calls while
    /// the map is not modified.
    #[must_use]
    pub fn iter(&self) -> AssociativeMapIterator<'_, K, V> {
        AssociativeMapIterator {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.length,
        }
    }

    /// Returns an iterator yielding each key with a mutable reference to its
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let mut map: AssociativeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// for (_, value) in map.iter_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(map.get("a"), Some(&10));
    /// assert_eq!(map.get("b"), Some(&20));
    /// ```
    pub fn iter_mut(&mut self) -> AssociativeMapIterMut<'_, K, V> {
        AssociativeMapIterMut {
            buckets: self.buckets.iter_mut(),
            current: None,
            remaining: self.length,
        }
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> AssociativeMap<K, V, S> {
    /// Computes the bucket holding `key` for the current bucket count.
    #[allow(clippy::cast_possible_truncation)]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hash_builder.hash_one(key);
        // The remainder is below `buckets.len()`, so it always fits in usize.
        (hash % self.buckets.len() as u64) as usize
    }

    #[allow(clippy::cast_precision_loss)]
    fn exceeds_threshold_after_insert(&self) -> bool {
        (self.length + 1) as f64 / self.buckets.len() as f64 > self.config.load_factor_threshold
    }

    /// Doubles the bucket array and relinks every entry into its new bucket.
    ///
    /// Entries are moved, not reallocated, and `length` is untouched.
    fn rehash(&mut self) {
        let old_bucket_count = self.buckets.len();
        let new_bucket_count = old_bucket_count.saturating_mul(GROWTH_FACTOR);
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_bucket_count));

        for mut chain in old_buckets {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = self.bucket_index(&entry.key);
                append_to_chain(&mut self.buckets[index], entry);
            }
        }

        tracing::debug!(
            from = old_bucket_count,
            to = new_bucket_count,
            entries = self.length,
            "rehashed associative map"
        );
    }

    /// Inserts a key-value pair, returning the value previously stored under
    /// `key`.
    ///
    /// If `(len + 1) / bucket_count` would exceed the load factor threshold,
    /// the bucket array is doubled before the key is looked up. A new key is
    /// appended to the end of its bucket chain; an existing key has its value
    /// replaced in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let mut map = AssociativeMap::new();
    /// assert_eq!(map.put("test", 1), None);
    /// assert_eq!(map.put("test", 2), Some(1));
    /// assert_eq!(map.get("test"), Some(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.exceeds_threshold_after_insert() {
            self.rehash();
        }

        let index = self.bucket_index(&key);
        let mut cursor = &mut self.buckets[index];
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
            cursor = &mut entry.next;
        }
        *cursor = Some(Box::new(Entry {
            key,
            value,
            next: None,
        }));
        self.length += 1;
        None
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// The key may be any borrowed form of the map's key type, but `Hash` and
    /// `Eq` on the borrowed form must match those for the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let mut map = AssociativeMap::new();
    /// map.put("hello".to_string(), 42);
    ///
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let mut cursor = self.buckets[index].as_deref();
        while let Some(entry) = cursor {
            if entry.key.borrow() == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let mut map = AssociativeMap::new();
    /// map.put("counter", 0);
    /// if let Some(counter) = map.get_mut("counter") {
    ///     *counter += 1;
    /// }
    /// assert_eq!(map.get("counter"), Some(&1));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key.borrow() == key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    /// Returns `true` if the map holds a value for `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// The matching entry is spliced out of its chain; the remaining entries
    /// of that bucket keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::AssociativeMap;
    ///
    /// let mut map = AssociativeMap::new();
    /// map.put("a", 1);
    /// map.put("b", 2);
    ///
    /// assert_eq!(map.remove("a"), Some(1));
    /// assert_eq!(map.remove("a"), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);

        // `cursor` is the link owning the entry under inspection: the bucket
        // head first, then the previous entry's `next`.
        let mut cursor = &mut self.buckets[index];
        while cursor
            .as_ref()
            .is_some_and(|entry| entry.key.borrow() != key)
        {
            cursor = &mut cursor.as_mut()?.next;
        }

        let removed = cursor.take()?;
        let Entry { value, next, .. } = *removed;
        *cursor = next;
        self.length -= 1;
        Some(value)
    }
}

impl<K, V, S> Drop for AssociativeMap<K, V, S> {
    fn drop(&mut self) {
        for chain in &mut self.buckets {
            unlink_chain(chain.take());
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of an [`AssociativeMap`].
pub struct AssociativeMapIterator<'a, K, V> {
    buckets: std::slice::Iter<'a, Bucket<K, V>>,
    current: Option<&'a Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for AssociativeMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current {
                self.current = entry.next.as_deref();
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for AssociativeMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for AssociativeMapIterator<'_, K, V> {}

/// An iterator over the entries of an [`AssociativeMap`] with mutable
/// access to the values.
pub struct AssociativeMapIterMut<'a, K, V> {
    buckets: std::slice::IterMut<'a, Bucket<K, V>>,
    current: Option<&'a mut Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for AssociativeMapIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.take() {
                let Entry { key, value, next } = entry;
                self.current = next.as_deref_mut();
                self.remaining -= 1;
                return Some((&*key, value));
            }
            self.current = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for AssociativeMapIterMut<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for AssociativeMapIterMut<'_, K, V> {}

/// An owning iterator over the entries of an [`AssociativeMap`].
pub struct AssociativeMapIntoIterator<K, V> {
    buckets: std::vec::IntoIter<Bucket<K, V>>,
    current: Bucket<K, V>,
    remaining: usize,
}

impl<K, V> Iterator for AssociativeMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.take() {
                let Entry { key, value, next } = *entry;
                self.current = next;
                self.remaining -= 1;
                return Some((key, value));
            }
            self.current = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for AssociativeMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for AssociativeMapIntoIterator<K, V> {}

impl<K, V> Drop for AssociativeMapIntoIterator<K, V> {
    fn drop(&mut self) {
        unlink_chain(self.current.take());
        for chain in self.buckets.by_ref() {
            unlink_chain(chain);
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Clone, V: Clone, S: Clone> Clone for AssociativeMap<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.iter().map(clone_chain).collect(),
            length: self.length,
            config: self.config,
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<K, V, S: Default> Default for AssociativeMap<K, V, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)>
    for AssociativeMap<K, V, S>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for AssociativeMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for AssociativeMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = AssociativeMapIntoIterator<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let remaining = mem::take(&mut self.length);
        AssociativeMapIntoIterator {
            buckets: mem::take(&mut self.buckets).into_iter(),
            current: None,
            remaining,
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a AssociativeMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = AssociativeMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut AssociativeMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = AssociativeMapIterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> PartialEq for AssociativeMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for AssociativeMap<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for AssociativeMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
