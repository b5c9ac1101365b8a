//! Monotonic usage counter with an incrementally maintained leader.
//!
//! `PopularityCounter` is the bookkeeping half of
//! [`PopularMap`](crate::PopularMap): one instance counts keys, another
//! counts values. Counts only ever grow; nothing is purged when the
//! corresponding entry leaves the backing store.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<T, usize>        entries: Vec<(T, u64)>
//!   ┌─────────┬───────┐               ┌──────┬─────────────┐
//!   │ "a"     │   0   │ ────────────► │  0   │ ("a", 3)    │ ◄── leader
//!   │ "b"     │   1   │ ────────────► │  1   │ ("b", 1)    │
//!   │ "c"     │   2   │ ────────────► │  2   │ ("c", 3)    │
//!   └─────────┴───────┘               └──────┴─────────────┘
//!      (hash order)                    first-recorded order
//! ```
//!
//! - `entries` keeps items in the order they were first recorded.
//! - `leader` is the slot holding the maximum count. It only moves when
//!   another slot strictly exceeds it, so among equal maxima the slot that
//!   reached the count first wins.
//! - [`ascending`](PopularityCounter::ascending) stable-sorts a copy of
//!   `entries`, so equal counts keep first-recorded order.
//!
//! ## Example Usage
//!
//! ```
//! use popmap::ds::PopularityCounter;
//!
//! let mut counter = PopularityCounter::new();
//! counter.record(&"a");
//! counter.record(&"b");
//! counter.record(&"a");
//!
//! assert_eq!(counter.count(&"a"), 2);
//! assert_eq!(counter.count(&"zzz"), 0);
//! assert_eq!(counter.most_popular(), Some((&"a", 2)));
//! assert_eq!(counter.ascending(), vec![("b", 1), ("a", 2)]);
//! ```
//!
//! ## Performance
//!
//! | Operation      | Time         |
//! |----------------|--------------|
//! | `record`       | O(1) avg     |
//! | `count`        | O(1) avg     |
//! | `most_popular` | O(1)         |
//! | `ascending`    | O(n log n)   |

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::InvariantError;

/// Counts how many times each item was recorded.
#[derive(Debug, Clone)]
pub struct PopularityCounter<T> {
    index: FxHashMap<T, usize>,
    entries: Vec<(T, u64)>,
    leader: Option<usize>,
}

impl<T> PopularityCounter<T> {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            entries: Vec::new(),
            leader: None,
        }
    }

    /// Creates an empty counter with room for `capacity` distinct items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: Vec::with_capacity(capacity),
            leader: None,
        }
    }

    /// Returns the number of distinct items ever recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| *count).sum()
    }

    /// Returns the item with the highest count, if any.
    pub fn most_popular(&self) -> Option<(&T, u64)> {
        self.leader.map(|slot| {
            let (item, count) = &self.entries[slot];
            (item, *count)
        })
    }

    /// Iterates `(item, count)` pairs in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    /// Forgets every recorded item.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
        self.leader = None;
    }
}

impl<T> PopularityCounter<T>
where
    T: Eq + Hash + Clone,
{
    /// Adds one use of `item` and returns its new count.
    pub fn record(&mut self, item: &T) -> u64 {
        let slot = match self.index.get(item) {
            Some(&slot) => {
                self.entries[slot].1 += 1;
                slot
            },
            None => {
                let slot = self.entries.len();
                self.entries.push((item.clone(), 1));
                self.index.insert(item.clone(), slot);
                slot
            },
        };

        let count = self.entries[slot].1;
        match self.leader {
            Some(leader) if self.entries[leader].1 >= count => {},
            _ => self.leader = Some(slot),
        }
        count
    }

    /// Returns the recorded count for `item`, or 0 if never recorded.
    pub fn count(&self, item: &T) -> u64 {
        self.index
            .get(item)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Copies every `(item, count)` pair, sorted by ascending count.
    ///
    /// Equal counts keep first-recorded order.
    pub fn ascending(&self) -> Vec<(T, u64)> {
        let mut snapshot = self.entries.clone();
        snapshot.sort_by_key(|(_, count)| *count);
        snapshot
    }

    /// Validates internal consistency.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.entries.len() {
            return Err(InvariantError::new(format!(
                "index tracks {} items but entries holds {}",
                self.index.len(),
                self.entries.len()
            )));
        }

        for (slot, (item, count)) in self.entries.iter().enumerate() {
            if *count == 0 {
                return Err(InvariantError::new(format!(
                    "slot {} has a zero count",
                    slot
                )));
            }
            if self.index.get(item) != Some(&slot) {
                return Err(InvariantError::new(format!(
                    "index does not point back to slot {}",
                    slot
                )));
            }
        }

        match self.leader {
            None if !self.entries.is_empty() => {
                Err(InvariantError::new("non-empty counter has no leader"))
            },
            Some(_) if self.entries.is_empty() => {
                Err(InvariantError::new("empty counter has a leader"))
            },
            Some(leader) => {
                let max = self.entries.iter().map(|(_, count)| *count).max();
                if max != Some(self.entries[leader].1) {
                    return Err(InvariantError::new(format!(
                        "leader slot {} holds {} but maximum is {:?}",
                        leader, self.entries[leader].1, max
                    )));
                }
                Ok(())
            },
            None => Ok(()),
        }
    }
}

impl<T> Default for PopularityCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}
