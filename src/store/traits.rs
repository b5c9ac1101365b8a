//! Backing-store abstraction for [`PopularMap`](crate::PopularMap).
//!
//! Stores own the authoritative key/value data, while the map decorator
//! owns popularity accounting. This keeps counting logic independent of how
//! entries are stored (e.g., `HashMap`, `FxHashMap`, `BTreeMap`).
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────┐
//!   │                        MapStore                           │
//!   │                                                           │
//!   │  Key / Value  (associated types)                          │
//!   │  get(&, &K) → Option<&V>          insert(&mut, K, V)      │
//!   │  contains_key(&, &K) → bool       remove(&mut, &K)        │
//!   │  contains_value(&, &V) → bool     insert_all(&mut, iter)  │
//!   │  len(&) / is_empty(&)             clear(&mut)             │
//!   │  iter(&) → (&K, &V)                                       │
//!   └───────────────────────────┬───────────────────────────────┘
//!                               │
//!              ┌────────────────┴────────────────┐
//!              ▼                                 ▼
//!     HashMap<K, V, S>                    BTreeMap<K, V>
//!     (any BuildHasher,                   (K: Ord, sorted
//!      incl. FxHashMap)                    key iteration)
//! ```
//!
//! Stores never see popularity counters. Every method here is a plain data
//! operation; the decorator decides which calls are charged.

/// Associative container that a [`PopularMap`](crate::PopularMap) delegates to.
///
/// Keys are unique. No iteration order is required; implementations expose
/// whatever order their container has. Key and value types are associated
/// so that a store fixes them for the decorator wrapping it.
pub trait MapStore {
    type Key;
    type Value;

    /// Borrowing iterator over `(key, value)` pairs.
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Fetch the value mapped to `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Check if a key exists.
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Check if any key maps to `value`. Linear in the number of entries
    /// for both provided stores.
    fn contains_value(&self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Insert or update an entry. Returns the previous value if present.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Insert every entry from `entries`, overwriting existing keys.
    fn insert_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }

    /// Remove an entry by key.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    /// Remove all entries.
    fn clear(&mut self);

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Check if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all entries.
    fn iter(&self) -> Self::Iter<'_>;
}
