//! # Metrics Trait Hierarchy
//!
//! Separates *recording*, *snapshotting*, and *export* responsibilities into
//! small traits so monitoring never leaks into the map's counting logic.
//!
//! ```text
//!   ┌────────────────────────────────┐   ┌────────────────────────────────┐
//!   │ PopularMapMetricsRecorder      │   │ PopularMapMetricsReadRecorder  │
//!   │ (&mut self: contains/get/      │   │ (&self: popular_key/value,     │
//!   │  insert/remove/bulk/clear)     │   │  popularity lookups, iter)     │
//!   └───────────────┬────────────────┘   └───────────────┬────────────────┘
//!                   └──────────────┬─────────────────────┘
//!                                  ▼
//!                        PopularMapMetrics
//!                                  │
//!          ┌───────────────────────┼────────────────────────┐
//!          ▼                       ▼                        ▼
//!   MetricsSnapshotProvider   MetricsReset           MetricsExporter
//!   (bench/test)              (between runs)         (production monitoring)
//! ```

/// Counters for operations that take `&mut self` on the map.
pub trait PopularMapMetricsRecorder {
    fn record_contains_key_hit(&mut self);
    fn record_contains_key_miss(&mut self);
    fn record_contains_value_hit(&mut self);
    fn record_contains_value_miss(&mut self);
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_remove_hit(&mut self);
    fn record_remove_miss(&mut self);
    fn record_bulk_insert(&mut self, entries: usize);
    fn record_clear(&mut self);
    fn record_popularity_reset(&mut self);
}

/// Read-only counters for `&self` methods (uses interior mutability).
pub trait PopularMapMetricsReadRecorder {
    fn record_popular_key_call(&self);
    fn record_popular_key_found(&self);
    fn record_popular_value_call(&self);
    fn record_popular_value_found(&self);
    fn record_key_popularity_call(&self);
    fn record_value_popularity_call(&self);
    fn record_popular_iter_call(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
