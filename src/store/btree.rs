//! BTreeMap-backed store.
//!
//! Useful when callers want `keys()`/`values()`/`iter()` on a
//! [`PopularMap`](crate::PopularMap) to come out in key order. Popularity
//! accounting is unaffected by the store choice.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::store::traits::MapStore;

impl<K, V> MapStore for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }
}
