//! # Popularity-Tracking Map
//!
//! [`PopularMap`] decorates any [`MapStore`] with two usage counters: one
//! for keys and one for values. Lookups that name a specific key or value
//! "charge" it; structural and bulk operations are free. The counters then
//! answer "which key/value is used most" and drive a least-to-most-popular
//! value iterator.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                       PopularMap<K, V, M>                                │
//!   │                                                                          │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │  store: M  (MapStore<Key = K, Value = V>, default HashMap<K, V>)   │ │
//!   │   │                                                                    │ │
//!   │   │  ┌─────────┬──────────┐                                            │ │
//!   │   │  │   Key   │  Value   │   authoritative data, nothing else        │ │
//!   │   │  ├─────────┼──────────┤                                            │ │
//!   │   │  │  "a"    │    1     │                                            │ │
//!   │   │  │  "b"    │    2     │                                            │ │
//!   │   │  └─────────┴──────────┘                                            │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   │                                                                          │
//!   │   ┌───────────────────────────────┐  ┌────────────────────────────────┐  │
//!   │   │ key_popularity:               │  │ value_popularity:              │  │
//!   │   │   PopularityCounter<K>        │  │   PopularityCounter<V>         │  │
//!   │   │                               │  │                                │  │
//!   │   │   "a" → 3                     │  │   1 → 3                        │  │
//!   │   │   "b" → 1                     │  │   2 → 1                        │  │
//!   │   │   "gone" → 2   (not in store) │  │   9 → 1   (overwritten)        │  │
//!   │   └───────────────────────────────┘  └────────────────────────────────┘  │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Charging Rules
//!
//! Every operation first updates the counters, then delegates to the store.
//!
//! | Operation           | Key charge | Value charge                               |
//! |---------------------|------------|--------------------------------------------|
//! | `contains_key(k)`   | `k`        | -                                          |
//! | `contains_value(v)` | -          | `v`                                        |
//! | `get(k)`            | `k`        | mapped value, if any                       |
//! | `insert(k, v)`      | `k`        | `v`, plus the previous value if any        |
//! | `remove(k)`         | `k`        | removed value, if any                      |
//! | `insert_all`/extend | -          | -                                          |
//! | `clear`             | -          | -                                          |
//! | `len`/`keys`/`iter` | -          | -                                          |
//!
//! Misses are charged too: `get(&"nope")` raises the popularity of `"nope"`
//! even though nothing is stored under it. `insert(k, v)` over an existing
//! `k → v` charges `v` twice (once as the new value, once as the old one).
//!
//! ## Counters Never Shrink
//!
//! ```text
//!   insert("a", 1)   key: {a:1}        value: {1:1}
//!   remove("a")      key: {a:2}        value: {1:2}    store: {}
//!   clear()          key: {a:2}        value: {1:2}    store: {}   ← unchanged
//!   popular_value()  → Ok(1)                            (1 is not stored!)
//! ```
//!
//! Popularity measures operation history, not current contents. Removal,
//! overwrite, and `clear()` never touch the counters. Only
//! [`reset_popularity`](PopularMap::reset_popularity) empties them, and it
//! leaves the store alone.
//!
//! ## Ties
//!
//! When several keys (or values) share the maximum count,
//! [`popular_key`](PopularMap::popular_key) returns the one that reached
//! that count first. [`popular_iter`](PopularMap::popular_iter) orders equal
//! counts by when each value was first charged. Callers should only rely on
//! the returned entry having the maximum count.
//!
//! ## Example Usage
//!
//! ```
//! use popmap::PopularMap;
//!
//! let mut map = PopularMap::new();
//! map.insert("a", 1);
//! map.insert("b", 2);
//! map.get(&"a");
//! map.get(&"a");
//!
//! assert_eq!(map.key_popularity(&"a"), 3);
//! assert_eq!(map.value_popularity(&1), 3);
//! assert_eq!(map.popular_key(), Ok(&"a"));
//! assert_eq!(map.popular_value(), Ok(&1));
//!
//! let order: Vec<i32> = map.popular_iter().collect();
//! assert_eq!(order, vec![2, 1]);
//! ```
//!
//! ## Thread Safety
//!
//! - `PopularMap` is **NOT thread-safe**; even `get` takes `&mut self`
//!   because it updates counters.
//! - With the `concurrency` feature, use
//!   [`SharedPopularMap`](crate::concurrent::SharedPopularMap).
//!
//! ## Implementation Notes
//!
//! - Keys and values are counter keys, so both need `Eq + Hash + Clone`.
//!   A key or value is cloned into its counter the first time it is charged.
//! - `popular_key`/`popular_value` are O(1); `popular_iter` is O(n log n)
//!   in the number of distinct values ever charged.
//! - **Count Overflow**: Theoretically possible at `u64::MAX` charges.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::ds::PopularityCounter;
use crate::error::{EmptyStateError, InvariantError};
use crate::iter::PopularIter;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::PopularMapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::PopularMapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, PopularMapMetricsReadRecorder,
    PopularMapMetricsRecorder,
};
use crate::store::MapStore;

/// Map decorator that tracks how often each key and value is used.
///
/// See module-level documentation for details.
pub struct PopularMap<K, V, M = HashMap<K, V>> {
    store: M,
    key_popularity: PopularityCounter<K>,
    value_popularity: PopularityCounter<V>,
    #[cfg(feature = "metrics")]
    metrics: PopularMapMetrics,
}

impl<K, V> PopularMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map backed by a fresh `HashMap`.
    pub fn new() -> Self {
        Self::assemble(HashMap::new(), 0)
    }

    /// Creates an empty map with room for `capacity` entries and as many
    /// distinct tracked keys and values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::assemble(HashMap::with_capacity(capacity), capacity)
    }
}

impl<K, V, M> PopularMap<K, V, M> {
    fn assemble(store: M, tracked_capacity: usize) -> Self {
        Self {
            store,
            key_popularity: PopularityCounter::with_capacity(tracked_capacity),
            value_popularity: PopularityCounter::with_capacity(tracked_capacity),
            #[cfg(feature = "metrics")]
            metrics: PopularMapMetrics::default(),
        }
    }

    /// Borrows the backing store.
    pub fn store(&self) -> &M {
        &self.store
    }

    /// Consumes the map and returns the backing store. Counters are dropped.
    pub fn into_store(self) -> M {
        self.store
    }

    /// Borrows the key counter.
    pub fn key_counter(&self) -> &PopularityCounter<K> {
        &self.key_popularity
    }

    /// Borrows the value counter.
    pub fn value_counter(&self) -> &PopularityCounter<V> {
        &self.value_popularity
    }

    /// Empties both popularity counters. The store is left untouched.
    pub fn reset_popularity(&mut self) {
        debug!(
            keys = self.key_popularity.len(),
            values = self.value_popularity.len(),
            "resetting popularity counters"
        );
        self.key_popularity.clear();
        self.value_popularity.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_popularity_reset();
    }
}

impl<K, V, M> PopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V>,
{
    /// Wraps an existing store. Its current entries start with zero
    /// popularity.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    ///
    /// use popmap::PopularMap;
    ///
    /// let store = BTreeMap::from([("x", 10), ("y", 20)]);
    /// let mut map = PopularMap::from_store(store);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.key_popularity(&"x"), 0);
    /// assert!(map.popular_key().is_err());
    /// ```
    pub fn from_store(store: M) -> Self {
        debug!(entries = store.len(), "wrapping existing store");
        let tracked_capacity = store.len();
        Self::assemble(store, tracked_capacity)
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterates stored keys. Not charged.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.store.iter().map(|(key, _)| key)
    }

    /// Iterates stored values. Not charged.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.store.iter().map(|(_, value)| value)
    }

    /// Iterates stored entries. Not charged.
    pub fn iter(&self) -> M::Iter<'_> {
        self.store.iter()
    }

    /// Inserts every entry, overwriting existing keys. Not charged.
    pub fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        #[cfg(feature = "metrics")]
        {
            let mut inserted = 0usize;
            self.store
                .insert_all(entries.into_iter().inspect(|_| inserted += 1));
            self.metrics.record_bulk_insert(inserted);
        }
        #[cfg(not(feature = "metrics"))]
        self.store.insert_all(entries);
    }

    /// Removes every stored entry. Popularity counters are untouched.
    pub fn clear(&mut self) {
        self.store.clear();
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }
}

impl<K, V, M> PopularMap<K, V, M>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    M: MapStore<Key = K, Value = V>,
{
    /// Charges `key`, then checks whether it is stored.
    pub fn contains_key(&mut self, key: &K) -> bool {
        self.key_popularity.record(key);
        let found = self.store.contains_key(key);
        #[cfg(feature = "metrics")]
        if found {
            self.metrics.record_contains_key_hit();
        } else {
            self.metrics.record_contains_key_miss();
        }
        found
    }

    /// Charges `value`, then checks whether any key maps to it.
    pub fn contains_value(&mut self, value: &V) -> bool {
        self.value_popularity.record(value);
        let found = self.store.contains_value(value);
        #[cfg(feature = "metrics")]
        if found {
            self.metrics.record_contains_value_hit();
        } else {
            self.metrics.record_contains_value_miss();
        }
        found
    }

    /// Charges `key` and, on a hit, the mapped value.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.key_popularity.record(key);
        let value = self.store.get(key);
        match value {
            Some(value) => {
                self.value_popularity.record(value);
                #[cfg(feature = "metrics")]
                self.metrics.record_get_hit();
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
            },
        }
        value
    }

    /// Charges `key`, `value`, and the value being replaced (if any), then
    /// stores the entry. Returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.key_popularity.record(&key);
        self.value_popularity.record(&value);
        if let Some(previous) = self.store.get(&key) {
            self.value_popularity.record(previous);
        }

        let previous = self.store.insert(key, value);
        #[cfg(feature = "metrics")]
        if previous.is_some() {
            self.metrics.record_insert_update();
        } else {
            self.metrics.record_insert_new();
        }
        previous
    }

    /// Charges `key` and, if it was stored, the removed value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.key_popularity.record(key);
        let removed = self.store.remove(key);
        if let Some(value) = &removed {
            self.value_popularity.record(value);
        }
        #[cfg(feature = "metrics")]
        if removed.is_some() {
            self.metrics.record_remove_hit();
        } else {
            self.metrics.record_remove_miss();
        }
        removed
    }

    /// Returns how many times `key` was charged, or 0.
    pub fn key_popularity(&self, key: &K) -> u64 {
        #[cfg(feature = "metrics")]
        self.metrics.record_key_popularity_call();
        self.key_popularity.count(key)
    }

    /// Returns how many times `value` was charged, or 0.
    pub fn value_popularity(&self, value: &V) -> u64 {
        #[cfg(feature = "metrics")]
        self.metrics.record_value_popularity_call();
        self.value_popularity.count(value)
    }

    /// Returns the most charged key so far.
    ///
    /// The key need not be stored any more. Fails if no key was ever charged.
    pub fn popular_key(&self) -> Result<&K, EmptyStateError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_popular_key_call();
        let (key, _) = self
            .key_popularity
            .most_popular()
            .ok_or_else(|| EmptyStateError::new("no key has been tracked yet"))?;
        #[cfg(feature = "metrics")]
        self.metrics.record_popular_key_found();
        Ok(key)
    }

    /// Returns the most charged value so far.
    ///
    /// The value need not be stored any more. Fails if no value was ever
    /// charged.
    pub fn popular_value(&self) -> Result<&V, EmptyStateError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_popular_value_call();
        let (value, _) = self
            .value_popularity
            .most_popular()
            .ok_or_else(|| EmptyStateError::new("no value has been tracked yet"))?;
        #[cfg(feature = "metrics")]
        self.metrics.record_popular_value_found();
        Ok(value)
    }

    /// Snapshots value popularity and iterates values from least to most
    /// popular.
    ///
    /// The iterator owns its snapshot: later changes to this map do not
    /// affect it, and it may yield values that are no longer stored.
    pub fn popular_iter(&self) -> PopularIter<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_popular_iter_call();
        let snapshot = self.value_popularity.ascending();
        trace!(values = snapshot.len(), "popularity snapshot taken");
        PopularIter::from_sorted(snapshot)
    }

    /// Validates both counters.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.key_popularity
            .check_invariants()
            .map_err(|err| InvariantError::new(format!("key counter: {}", err)))?;
        self.value_popularity
            .check_invariants()
            .map_err(|err| InvariantError::new(format!("value counter: {}", err)))
    }
}

#[cfg(feature = "metrics")]
impl<K, V, M> PopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V>,
{
    pub fn metrics_snapshot(&self) -> PopularMapMetricsSnapshot {
        PopularMapMetricsSnapshot {
            contains_key_calls: self.metrics.contains_key_calls,
            contains_key_hits: self.metrics.contains_key_hits,
            contains_value_calls: self.metrics.contains_value_calls,
            contains_value_hits: self.metrics.contains_value_hits,
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_new: self.metrics.insert_new,
            insert_updates: self.metrics.insert_updates,
            remove_calls: self.metrics.remove_calls,
            remove_hits: self.metrics.remove_hits,
            bulk_insert_calls: self.metrics.bulk_insert_calls,
            bulk_inserted_entries: self.metrics.bulk_inserted_entries,
            clear_calls: self.metrics.clear_calls,
            popularity_resets: self.metrics.popularity_resets,
            popular_key_calls: self.metrics.popular_key_calls.get(),
            popular_key_found: self.metrics.popular_key_found.get(),
            popular_value_calls: self.metrics.popular_value_calls.get(),
            popular_value_found: self.metrics.popular_value_found.get(),
            key_popularity_calls: self.metrics.key_popularity_calls.get(),
            value_popularity_calls: self.metrics.value_popularity_calls.get(),
            popular_iter_calls: self.metrics.popular_iter_calls.get(),
            store_len: self.store.len(),
            tracked_keys: self.key_popularity.len(),
            tracked_values: self.value_popularity.len(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, M> MetricsSnapshotProvider<PopularMapMetricsSnapshot> for PopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V>,
{
    fn snapshot(&self) -> PopularMapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V, M> MetricsReset for PopularMap<K, V, M> {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl<K, V, M> Default for PopularMap<K, V, M>
where
    M: Default,
{
    fn default() -> Self {
        Self::assemble(M::default(), 0)
    }
}

impl<K, V, M> From<M> for PopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V>,
{
    fn from(store: M) -> Self {
        Self::from_store(store)
    }
}

impl<K, V, M> Extend<(K, V)> for PopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        self.insert_all(entries);
    }
}

impl<K, V, M> FromIterator<(K, V)> for PopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut map = Self::default();
        map.insert_all(entries);
        map
    }
}

impl<'a, K, V, M> IntoIterator for &'a PopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = M::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

impl<K, V, M> fmt::Debug for PopularMap<K, V, M>
where
    K: fmt::Debug,
    V: fmt::Debug,
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopularMap")
            .field("store", &self.store)
            .field("key_popularity", &self.key_popularity)
            .field("value_popularity", &self.value_popularity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rustc_hash::FxHashMap;

    use super::*;

    fn assert_invariants<K, V, M>(map: &PopularMap<K, V, M>)
    where
        K: Eq + Hash + Clone,
        V: Eq + Hash + Clone,
        M: MapStore<Key = K, Value = V>,
    {
        if let Err(err) = map.check_invariants() {
            panic!("invariant violated: {}", err);
        }
    }

    // Charging rules, one operation at a time
    mod charging {
        use super::*;

        #[test]
        fn contains_key_charges_hits_and_misses() {
            let mut map = PopularMap::new();
            map.insert("a", 1);

            assert!(map.contains_key(&"a"));
            assert!(!map.contains_key(&"b"));
            assert!(!map.contains_key(&"b"));

            assert_eq!(map.key_popularity(&"a"), 2); // insert + contains
            assert_eq!(map.key_popularity(&"b"), 2);
            // contains_key never charges values
            assert_eq!(map.value_popularity(&1), 1);
            assert_invariants(&map);
        }

        #[test]
        fn contains_value_charges_value_only() {
            let mut map = PopularMap::new();
            map.insert("a", 1);

            assert!(map.contains_value(&1));
            assert!(!map.contains_value(&7));

            assert_eq!(map.value_popularity(&1), 2);
            assert_eq!(map.value_popularity(&7), 1);
            assert_eq!(map.key_popularity(&"a"), 1);
        }

        #[test]
        fn get_hit_charges_key_and_value() {
            let mut map = PopularMap::new();
            map.insert("a", 1);

            assert_eq!(map.get(&"a"), Some(&1));
            assert_eq!(map.key_popularity(&"a"), 2);
            assert_eq!(map.value_popularity(&1), 2);
        }

        #[test]
        fn get_miss_charges_key_only() {
            let mut map: PopularMap<&str, i32> = PopularMap::new();

            assert_eq!(map.get(&"missing"), None);
            assert_eq!(map.key_popularity(&"missing"), 1);
            assert!(map.value_counter().is_empty());
        }

        #[test]
        fn insert_new_key_charges_key_and_new_value() {
            let mut map = PopularMap::new();
            assert_eq!(map.insert("a", 1), None);

            assert_eq!(map.key_popularity(&"a"), 1);
            assert_eq!(map.value_popularity(&1), 1);
        }

        #[test]
        fn insert_overwrite_charges_old_and_new_value() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            assert_eq!(map.insert("a", 2), Some(1));

            assert_eq!(map.key_popularity(&"a"), 2);
            assert_eq!(map.value_popularity(&1), 2); // new on first insert, old on second
            assert_eq!(map.value_popularity(&2), 1);
        }

        #[test]
        fn insert_same_value_twice_charges_it_twice() {
            let mut map = PopularMap::new();
            map.insert("k", 5);
            let before = map.value_popularity(&5);

            assert_eq!(map.insert("k", 5), Some(5));
            assert_eq!(map.value_popularity(&5), before + 2);
            assert_invariants(&map);
        }

        #[test]
        fn remove_hit_charges_key_and_removed_value() {
            let mut map = PopularMap::new();
            map.insert("a", 1);

            assert_eq!(map.remove(&"a"), Some(1));
            assert_eq!(map.key_popularity(&"a"), 2);
            assert_eq!(map.value_popularity(&1), 2);
            assert!(map.is_empty());
        }

        #[test]
        fn remove_miss_charges_key_only() {
            let mut map: PopularMap<&str, i32> = PopularMap::new();

            assert_eq!(map.remove(&"missing-key"), None);
            assert_eq!(map.key_popularity(&"missing-key"), 1);
            assert!(map.value_counter().is_empty());
        }
    }

    // Operations that must not move any counter
    mod free_operations {
        use super::*;

        #[test]
        fn insert_all_is_not_charged() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.insert_all(vec![("a", 10), ("b", 20), ("c", 30)]);

            assert_eq!(map.len(), 3);
            assert_eq!(map.key_popularity(&"a"), 1);
            assert_eq!(map.key_popularity(&"b"), 0);
            assert_eq!(map.value_popularity(&10), 0);
            assert_eq!(map.key_counter().len(), 1);
            assert_eq!(map.value_counter().len(), 1);
        }

        #[test]
        fn extend_is_not_charged() {
            let mut map: PopularMap<u32, u32> = PopularMap::new();
            map.extend((0..10).map(|i| (i, i * 2)));

            assert_eq!(map.len(), 10);
            assert!(map.key_counter().is_empty());
            assert!(map.value_counter().is_empty());
        }

        #[test]
        fn clear_keeps_popularity() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.insert("b", 2);
            map.get(&"a");

            let popular_key = *map.popular_key().unwrap();
            let popular_value = *map.popular_value().unwrap();
            map.clear();

            assert!(map.is_empty());
            assert_eq!(map.key_popularity(&"a"), 2);
            assert_eq!(map.value_popularity(&1), 2);
            assert_eq!(map.popular_key(), Ok(&popular_key));
            assert_eq!(map.popular_value(), Ok(&popular_value));
        }

        #[test]
        fn views_are_not_charged() {
            let mut map = PopularMap::new();
            map.insert(1, "one");
            map.insert(2, "two");

            let mut keys: Vec<i32> = map.keys().copied().collect();
            keys.sort_unstable();
            let mut values: Vec<&str> = map.values().copied().collect();
            values.sort_unstable();
            let entries = map.iter().count() + (&map).into_iter().count();

            assert_eq!(keys, vec![1, 2]);
            assert_eq!(values, vec!["one", "two"]);
            assert_eq!(entries, 4);
            assert_eq!(map.len(), 2);
            assert!(!map.is_empty());
            assert_eq!(map.key_popularity(&1), 1);
            assert_eq!(map.value_popularity(&"one"), 1);
        }
    }

    mod queries {
        use super::*;

        #[test]
        fn popular_key_on_fresh_map_is_empty_state() {
            let map: PopularMap<String, u8> = PopularMap::new();
            let err = map.popular_key().unwrap_err();
            assert!(err.message().contains("key"));
        }

        #[test]
        fn popular_value_on_fresh_map_is_empty_state() {
            let map: PopularMap<String, u8> = PopularMap::new();
            let err = map.popular_value().unwrap_err();
            assert!(err.message().contains("value"));
        }

        #[test]
        fn key_lookups_alone_leave_value_queries_empty() {
            let mut map: PopularMap<&str, i32> = PopularMap::new();
            map.contains_key(&"a");
            map.get(&"b");

            assert!(map.popular_key().is_ok());
            assert!(map.popular_value().is_err());
        }

        #[test]
        fn documented_scenario() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.insert("b", 2);
            map.get(&"a");
            map.get(&"a");

            assert_eq!(map.key_popularity(&"a"), 3);
            assert_eq!(map.key_popularity(&"b"), 1);
            assert_eq!(map.value_popularity(&1), 3);
            assert_eq!(map.value_popularity(&2), 1);
            assert_eq!(map.popular_key(), Ok(&"a"));
            assert_eq!(map.popular_value(), Ok(&1));
            assert_invariants(&map);
        }

        #[test]
        fn popular_key_may_be_absent_from_store() {
            let mut map = PopularMap::new();
            map.insert("gone", 1);
            map.remove(&"gone");
            map.insert("here", 2);

            assert_eq!(map.popular_key(), Ok(&"gone"));
            assert!(!map.store().contains_key(&"gone"));
        }

        #[test]
        fn tied_popular_key_has_maximum_count() {
            let mut map = PopularMap::new();
            map.insert("x", 1);
            map.insert("y", 2);
            map.insert("z", 3);

            let winner = *map.popular_key().unwrap();
            assert_eq!(map.key_popularity(&winner), 1);
        }

        #[test]
        fn reset_popularity_clears_counters_not_store() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.reset_popularity();

            assert_eq!(map.len(), 1);
            assert_eq!(map.key_popularity(&"a"), 0);
            assert!(map.popular_key().is_err());
            assert!(map.popular_value().is_err());
            assert_invariants(&map);
        }
    }

    mod popular_iter {
        use super::*;

        #[test]
        fn yields_ascending_by_count() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.insert("b", 2);
            map.get(&"a");
            map.get(&"a");

            let mut iter = map.popular_iter();
            assert_eq!(iter.try_next(), Ok(2));
            assert_eq!(iter.try_next(), Ok(1));
            assert!(iter.try_next().is_err());
        }

        #[test]
        fn is_a_snapshot() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.insert("b", 2);
            map.get(&"b");

            let iter = map.popular_iter();
            map.insert("c", 3);
            for _ in 0..10 {
                map.get(&"a");
            }

            assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2]);
        }

        #[test]
        fn includes_values_no_longer_stored() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.insert("a", 2);
            map.remove(&"a");

            let values: Vec<i32> = map.popular_iter().collect();
            assert_eq!(values.len(), 2);
            assert!(values.contains(&1));
            assert!(values.contains(&2));
            assert!(map.is_empty());
        }

        #[test]
        fn empty_map_gives_empty_iter() {
            let map: PopularMap<u8, u8> = PopularMap::new();
            let mut iter = map.popular_iter();
            assert_eq!(iter.len(), 0);
            assert!(iter.try_next().is_err());
        }

        #[test]
        fn does_not_touch_store_or_counters() {
            let mut map = PopularMap::new();
            map.insert("a", 1);

            let drained: Vec<i32> = map.popular_iter().collect();
            assert_eq!(drained, vec![1]);
            assert_eq!(map.len(), 1);
            assert_eq!(map.value_popularity(&1), 1);
        }
    }

    mod stores {
        use super::*;

        #[test]
        fn from_store_starts_with_zero_popularity() {
            let mut existing = HashMap::new();
            existing.insert("pre", 1);
            let mut map = PopularMap::from_store(existing);

            assert_eq!(map.len(), 1);
            assert_eq!(map.key_popularity(&"pre"), 0);
            assert_eq!(map.value_popularity(&1), 0);
            assert!(map.popular_key().is_err());

            assert_eq!(map.get(&"pre"), Some(&1));
            assert_eq!(map.key_popularity(&"pre"), 1);
        }

        #[test]
        fn btree_store_gives_sorted_views() {
            let mut map: PopularMap<u32, &str, BTreeMap<u32, &str>> = PopularMap::default();
            map.insert(3, "c");
            map.insert(1, "a");
            map.insert(2, "b");

            assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
            assert_eq!(map.popular_iter().len(), 3);
        }

        #[test]
        fn fx_store_via_from() {
            let store: FxHashMap<u64, u64> = (0..4).map(|i| (i, i)).collect();
            let mut map = PopularMap::from(store);
            assert!(map.contains_key(&3));
            assert_eq!(map.key_popularity(&3), 1);
        }

        #[test]
        fn collect_builds_uncharged_map() {
            let map: PopularMap<char, u32> = ('a'..='e').zip(0..).collect();
            assert_eq!(map.len(), 5);
            assert!(map.key_counter().is_empty());
        }

        #[test]
        fn into_store_returns_entries() {
            let mut map = PopularMap::with_capacity(4);
            map.insert("k", "v");
            let store = map.into_store();
            assert_eq!(store.get("k"), Some(&"v"));
        }

        #[test]
        fn debug_lists_store_and_counters() {
            let mut map = PopularMap::new();
            map.insert("k", 1);
            let dbg = format!("{:?}", map);
            assert!(dbg.contains("PopularMap"));
            assert!(dbg.contains("key_popularity"));
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics_counters {
        use super::*;

        #[test]
        fn snapshot_counts_calls_and_gauges() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.insert("a", 2);
            map.get(&"a");
            map.get(&"z");
            map.remove(&"z");
            map.insert_all(vec![("b", 3), ("c", 4)]);
            let _ = map.popular_key();
            let _ = map.popular_iter();

            let snapshot = map.metrics_snapshot();
            assert_eq!(snapshot.insert_calls, 2);
            assert_eq!(snapshot.insert_new, 1);
            assert_eq!(snapshot.insert_updates, 1);
            assert_eq!(snapshot.get_hits, 1);
            assert_eq!(snapshot.get_misses, 1);
            assert_eq!(snapshot.remove_calls, 1);
            assert_eq!(snapshot.remove_hits, 0);
            assert_eq!(snapshot.bulk_insert_calls, 1);
            assert_eq!(snapshot.bulk_inserted_entries, 2);
            assert_eq!(snapshot.popular_key_calls, 1);
            assert_eq!(snapshot.popular_key_found, 1);
            assert_eq!(snapshot.popular_iter_calls, 1);
            assert_eq!(snapshot.store_len, 3);
            assert_eq!(snapshot.tracked_keys, 2);
        }

        #[test]
        fn reset_metrics_keeps_popularity() {
            let mut map = PopularMap::new();
            map.insert("a", 1);
            map.reset_metrics();

            assert_eq!(map.snapshot().insert_calls, 0);
            assert_eq!(map.key_popularity(&"a"), 1);
        }
    }
}
