//! HashMap-backed store.
//!
//! ## Architecture
//! - `HashMap<K, V, S>` is used directly as the store; there is no wrapper
//!   type, so callers can hand an existing map to
//!   [`PopularMap::from_store`](crate::PopularMap::from_store).
//! - Any `S: BuildHasher` works, which covers both the default
//!   `RandomState` and `rustc_hash::FxHashMap`.
//!
//! ## Example Usage
//! ```rust
//! use std::collections::HashMap;
//!
//! use popmap::store::MapStore;
//!
//! let mut store: HashMap<u64, String> = HashMap::new();
//! MapStore::insert(&mut store, 1, "a".to_string());
//! assert!(MapStore::contains_key(&store, &1));
//! assert!(MapStore::contains_value(&store, &"a".to_string()));
//! ```
//!
//! ## Type Constraints
//! - `K: Eq + Hash` for key lookup.
//! - `S: BuildHasher` for custom hashers (defaults to `RandomState`).

use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::{BuildHasher, Hash};

use crate::store::traits::MapStore;

impl<K, V, S> MapStore for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn contains_value(&self, value: &V) -> bool
    where
        Self::Value: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    /// Bulk insert through `Extend`, which reserves ahead of time.
    fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.extend(entries);
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self);
    }

    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;

    #[test]
    fn hashmap_store_basic_ops() {
        let mut store: HashMap<&str, i32> = HashMap::new();
        assert!(MapStore::is_empty(&store));

        assert_eq!(MapStore::insert(&mut store, "a", 1), None);
        assert_eq!(MapStore::insert(&mut store, "a", 2), Some(1));
        assert_eq!(MapStore::get(&store, &"a"), Some(&2));
        assert_eq!(MapStore::len(&store), 1);

        assert_eq!(MapStore::remove(&mut store, &"a"), Some(2));
        assert_eq!(MapStore::remove(&mut store, &"a"), None);
        assert!(MapStore::is_empty(&store));
    }

    #[test]
    fn hashmap_store_contains_value_scans_entries() {
        let mut store: HashMap<u32, &str> = HashMap::new();
        MapStore::insert(&mut store, 1, "x");
        MapStore::insert(&mut store, 2, "y");

        assert!(MapStore::contains_value(&store, &"y"));
        assert!(!MapStore::contains_value(&store, &"z"));
    }

    #[test]
    fn fx_hashmap_store_insert_all_overwrites() {
        let mut store: FxHashMap<u32, u32> = FxHashMap::default();
        MapStore::insert(&mut store, 1, 10);
        MapStore::insert_all(&mut store, vec![(1, 11), (2, 20)]);

        assert_eq!(MapStore::get(&store, &1), Some(&11));
        assert_eq!(MapStore::get(&store, &2), Some(&20));

        MapStore::clear(&mut store);
        assert_eq!(MapStore::len(&store), 0);
        assert_eq!(MapStore::iter(&store).count(), 0);
    }
}
