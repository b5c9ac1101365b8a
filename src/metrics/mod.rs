//! Operation counters for [`PopularMap`](crate::PopularMap) (feature `metrics`).
//!
//! These count *calls*, not popularity. Popularity is domain state that
//! answers "which key is used most"; metrics answer "how is the map being
//! driven" (hit ratios, bulk inserts, snapshot frequency) for monitoring.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
