//! Snapshot iterator over values ordered by popularity.
//!
//! A [`PopularIter`] is created by
//! [`PopularMap::popular_iter`](crate::PopularMap::popular_iter). It copies
//! every tracked `(value, count)` pair at creation time, sorts them from
//! least to most popular, and then only consumes that private list.
//!
//! ```text
//!   value popularity at creation      PopularIter (owned snapshot)
//!   ┌────────┬───────┐                ┌──────────────────────────┐
//!   │   1    │   3   │   sort asc     │ (2, 1) → (1, 3) → end    │
//!   │   2    │   1   │ ─────────────► │   ▲                      │
//!   └────────┴───────┘                │ cursor                   │
//!                                     └──────────────────────────┘
//! ```
//!
//! - Later map mutations never reach an existing iterator.
//! - Values may no longer be present in the map: popularity outlives
//!   removal and overwrite.
//! - Equal counts come out in the order the values were first tracked.
//! - The iterator is forward-only and cannot be restarted; ask the map for
//!   a new one instead.

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

use crate::error::EmptyStateError;

/// Values from least to most popular, fixed at creation time.
pub struct PopularIter<V> {
    snapshot: vec::IntoIter<(V, u64)>,
}

impl<V> PopularIter<V> {
    /// Wraps an already sorted `(value, count)` snapshot.
    pub(crate) fn from_sorted(snapshot: Vec<(V, u64)>) -> Self {
        debug_assert!(snapshot.windows(2).all(|w| w[0].1 <= w[1].1));
        Self {
            snapshot: snapshot.into_iter(),
        }
    }

    /// Advances the iterator, failing once the snapshot is exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use popmap::PopularMap;
    ///
    /// let mut map = PopularMap::new();
    /// map.insert("a", 1);
    ///
    /// let mut iter = map.popular_iter();
    /// assert_eq!(iter.try_next(), Ok(1));
    /// assert!(iter.try_next().is_err());
    /// ```
    pub fn try_next(&mut self) -> Result<V, EmptyStateError> {
        self.next()
            .ok_or_else(|| EmptyStateError::new("popular iterator has no more values"))
    }

    /// Advances the iterator, yielding the value with the count it had when
    /// the snapshot was taken.
    pub fn next_with_count(&mut self) -> Option<(V, u64)> {
        self.snapshot.next()
    }
}

impl<V> Iterator for PopularIter<V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.snapshot.next().map(|(value, _)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.snapshot.size_hint()
    }
}

impl<V> ExactSizeIterator for PopularIter<V> {}

impl<V> FusedIterator for PopularIter<V> {}

impl<V: fmt::Debug> fmt::Debug for PopularIter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopularIter")
            .field("remaining", &self.snapshot.as_slice())
            .finish()
    }
}
