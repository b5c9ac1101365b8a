//! Lock-wrapped [`PopularMap`] for multi-threaded callers (feature `concurrency`).
//!
//! `PopularMap` itself makes no thread-safety promises: every lookup
//! mutates counters, so even `get` needs `&mut self`. `SharedPopularMap`
//! puts the whole map behind one `parking_lot::RwLock`.
//!
//! ## Locking
//!
//! | Method group                                         | Lock  |
//! |------------------------------------------------------|-------|
//! | `contains_key`, `contains_value`, `get`, `insert`,   | write |
//! | `remove`, `insert_all`, `clear`, `reset_popularity`  |       |
//! | `len`, `is_empty`, `key_popularity`,                 | read  |
//! | `value_popularity`, `popular_key`, `popular_value`,  |       |
//! | `popular_iter`                                       |       |
//!
//! Lookups return owned clones so no guard escapes a call. Each call is
//! atomic on its own; sequences of calls are not. Use
//! [`with_write`](SharedPopularMap::with_write) to run several operations
//! under one lock.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use popmap::concurrent::SharedPopularMap;
//!
//! let map = Arc::new(SharedPopularMap::new());
//! map.insert("hot", 1);
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             for _ in 0..10 {
//!                 map.get(&"hot");
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(map.key_popularity(&"hot"), 41);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

use crate::error::EmptyStateError;
use crate::iter::PopularIter;
use crate::map::PopularMap;
use crate::store::MapStore;

/// A [`PopularMap`] behind a reader-writer lock.
pub struct SharedPopularMap<K, V, M = HashMap<K, V>> {
    inner: RwLock<PopularMap<K, V, M>>,
}

impl<K, V> SharedPopularMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty shared map backed by a fresh `HashMap`.
    pub fn new() -> Self {
        Self::from_map(PopularMap::new())
    }
}

impl<K, V, M> SharedPopularMap<K, V, M> {
    /// Wraps an existing map, keeping its counters.
    pub fn from_map(map: PopularMap<K, V, M>) -> Self {
        Self {
            inner: RwLock::new(map),
        }
    }

    /// Consumes the wrapper and returns the map.
    pub fn into_inner(self) -> PopularMap<K, V, M> {
        self.inner.into_inner()
    }

    /// Runs `f` under the read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&PopularMap<K, V, M>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` under the write lock.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut PopularMap<K, V, M>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Empties both popularity counters. The store is left untouched.
    pub fn reset_popularity(&self) {
        self.inner.write().reset_popularity();
    }
}

impl<K, V, M> SharedPopularMap<K, V, M>
where
    M: MapStore<Key = K, Value = V>,
{
    /// Wraps an existing store. Its entries start with zero popularity.
    pub fn from_store(store: M) -> Self {
        Self::from_map(PopularMap::from_store(store))
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Inserts every entry. Not charged.
    pub fn insert_all<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.inner.write().insert_all(entries);
    }

    /// Removes every stored entry. Popularity counters are untouched.
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<K, V, M> SharedPopularMap<K, V, M>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
    M: MapStore<Key = K, Value = V>,
{
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.write().contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.inner.write().contains_value(value)
    }

    /// Charges `key` (and the mapped value on a hit) and returns a clone of
    /// the value.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.write().get(key).cloned()
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    pub fn key_popularity(&self, key: &K) -> u64 {
        self.inner.read().key_popularity(key)
    }

    pub fn value_popularity(&self, value: &V) -> u64 {
        self.inner.read().value_popularity(value)
    }

    pub fn popular_key(&self) -> Result<K, EmptyStateError> {
        self.inner.read().popular_key().cloned()
    }

    pub fn popular_value(&self) -> Result<V, EmptyStateError> {
        self.inner.read().popular_value().cloned()
    }

    /// Takes a snapshot under the read lock; iterating it needs no lock.
    pub fn popular_iter(&self) -> PopularIter<V> {
        self.inner.read().popular_iter()
    }
}

impl<K, V, M> Default for SharedPopularMap<K, V, M>
where
    M: Default,
{
    fn default() -> Self {
        Self::from_map(PopularMap::default())
    }
}

impl<K, V, M> From<PopularMap<K, V, M>> for SharedPopularMap<K, V, M> {
    fn from(map: PopularMap<K, V, M>) -> Self {
        Self::from_map(map)
    }
}

impl<K, V, M> fmt::Debug for SharedPopularMap<K, V, M>
where
    K: fmt::Debug,
    V: fmt::Debug,
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedPopularMap")
            .field("inner", &*self.inner.read())
            .finish()
    }
}
