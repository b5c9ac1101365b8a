//! Error types for the popmap library.
//!
//! ## Key Components
//!
//! - [`EmptyStateError`]: Returned when a popularity query has nothing to
//!   answer from (no key or value ever tracked), or when a
//!   [`PopularIter`](crate::iter::PopularIter) is advanced past its end.
//! - [`InvariantError`]: Returned when internal counter invariants are
//!   violated (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use popmap::error::EmptyStateError;
//! use popmap::PopularMap;
//!
//! let mut map: PopularMap<&str, i32> = PopularMap::new();
//!
//! // Nothing tracked yet
//! let err: EmptyStateError = map.popular_key().unwrap_err();
//! assert!(err.to_string().contains("key"));
//!
//! map.insert("a", 1);
//! assert_eq!(map.popular_key(), Ok(&"a"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// EmptyStateError
// ---------------------------------------------------------------------------

/// Error returned when an operation needs tracked state that does not exist.
///
/// Produced by [`PopularMap::popular_key`](crate::PopularMap::popular_key) and
/// [`PopularMap::popular_value`](crate::PopularMap::popular_value) before any
/// key or value has been tracked, and by
/// [`PopularIter::try_next`](crate::iter::PopularIter::try_next) once the
/// snapshot is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateError(String);

impl EmptyStateError {
    /// Creates a new `EmptyStateError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmptyStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for EmptyStateError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal popularity invariants are violated.
///
/// Produced by [`PopularityCounter::check_invariants`](crate::ds::PopularityCounter::check_invariants)
/// and [`PopularMap::check_invariants`](crate::PopularMap::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
