//! popmap: a map decorator that tracks how often keys and values are used.
//!
//! [`PopularMap`] wraps any [`MapStore`](store::MapStore) and charges keys
//! and values as lookups touch them. It answers which key/value is most
//! popular and iterates values from least to most popular.
//!
//! ## Modules
//!
//! | Module         | Purpose                                              |
//! |----------------|------------------------------------------------------|
//! | [`map`]        | `PopularMap`, the decorator and its charging rules   |
//! | [`iter`]       | `PopularIter`, the snapshot iterator                 |
//! | [`ds`]         | `PopularityCounter`, monotonic usage counting        |
//! | [`store`]      | `MapStore` trait and std map backends                |
//! | [`error`]      | `EmptyStateError`, `InvariantError`                  |
//! | `metrics`      | operation counters and Prometheus export (feature)   |
//! | `concurrent`   | `SharedPopularMap` lock wrapper (feature)            |

pub mod ds;
pub mod error;
pub mod iter;
pub mod map;
pub mod store;

#[cfg(feature = "concurrency")]
pub mod concurrent;
#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;

pub use error::EmptyStateError;
pub use iter::PopularIter;
pub use map::PopularMap;
