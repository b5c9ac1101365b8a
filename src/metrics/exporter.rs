use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::PopularMapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for popular-map metrics snapshots.
///
/// This exporter writes in the Prometheus text exposition format so it can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
///
/// # Example
///
/// ```
/// use popmap::metrics::exporter::PrometheusTextExporter;
/// use popmap::metrics::traits::MetricsExporter;
/// use popmap::PopularMap;
///
/// let mut map = PopularMap::new();
/// map.insert("a", 1);
///
/// let exporter = PrometheusTextExporter::new("popmap", Vec::new());
/// exporter.export(&map.metrics_snapshot());
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("popmap_insert_calls_total 1"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        // best-effort: write errors are dropped
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<PopularMapMetricsSnapshot>
    for PrometheusTextExporter<W>
{
    fn export(&self, snapshot: &PopularMapMetricsSnapshot) {
        let counters = [
            ("contains_key_calls_total", snapshot.contains_key_calls),
            ("contains_key_hits_total", snapshot.contains_key_hits),
            ("contains_value_calls_total", snapshot.contains_value_calls),
            ("contains_value_hits_total", snapshot.contains_value_hits),
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_new_total", snapshot.insert_new),
            ("insert_updates_total", snapshot.insert_updates),
            ("remove_calls_total", snapshot.remove_calls),
            ("remove_hits_total", snapshot.remove_hits),
            ("bulk_insert_calls_total", snapshot.bulk_insert_calls),
            ("bulk_inserted_entries_total", snapshot.bulk_inserted_entries),
            ("clear_calls_total", snapshot.clear_calls),
            ("popularity_resets_total", snapshot.popularity_resets),
            ("popular_key_calls_total", snapshot.popular_key_calls),
            ("popular_key_found_total", snapshot.popular_key_found),
            ("popular_value_calls_total", snapshot.popular_value_calls),
            ("popular_value_found_total", snapshot.popular_value_found),
            ("key_popularity_calls_total", snapshot.key_popularity_calls),
            ("value_popularity_calls_total", snapshot.value_popularity_calls),
            ("popular_iter_calls_total", snapshot.popular_iter_calls),
        ];
        for (suffix, value) in counters {
            self.write_counter(suffix, value);
        }

        self.write_gauge("store_len", snapshot.store_len as u64);
        self.write_gauge("tracked_keys", snapshot.tracked_keys as u64);
        self.write_gauge("tracked_values", snapshot.tracked_values as u64);
    }
}
