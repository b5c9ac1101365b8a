use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{PopularMapMetricsReadRecorder, PopularMapMetricsRecorder};

#[derive(Debug, Default)]
pub struct PopularMapMetrics {
    pub contains_key_calls: u64,
    pub contains_key_hits: u64,
    pub contains_value_calls: u64,
    pub contains_value_hits: u64,
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub remove_calls: u64,
    pub remove_hits: u64,
    pub bulk_insert_calls: u64,
    pub bulk_inserted_entries: u64,
    pub clear_calls: u64,
    pub popularity_resets: u64,
    pub popular_key_calls: MetricsCell,
    pub popular_key_found: MetricsCell,
    pub popular_value_calls: MetricsCell,
    pub popular_value_found: MetricsCell,
    pub key_popularity_calls: MetricsCell,
    pub value_popularity_calls: MetricsCell,
    pub popular_iter_calls: MetricsCell,
}

impl PopularMapMetrics {
    pub fn reset(&mut self) {
        let read_cells = [
            &self.popular_key_calls,
            &self.popular_key_found,
            &self.popular_value_calls,
            &self.popular_value_found,
            &self.key_popularity_calls,
            &self.value_popularity_calls,
            &self.popular_iter_calls,
        ];
        for cell in read_cells {
            cell.reset();
        }

        self.contains_key_calls = 0;
        self.contains_key_hits = 0;
        self.contains_value_calls = 0;
        self.contains_value_hits = 0;
        self.get_calls = 0;
        self.get_hits = 0;
        self.get_misses = 0;
        self.insert_calls = 0;
        self.insert_new = 0;
        self.insert_updates = 0;
        self.remove_calls = 0;
        self.remove_hits = 0;
        self.bulk_insert_calls = 0;
        self.bulk_inserted_entries = 0;
        self.clear_calls = 0;
        self.popularity_resets = 0;
    }
}

impl PopularMapMetricsRecorder for PopularMapMetrics {
    fn record_contains_key_hit(&mut self) {
        self.contains_key_calls += 1;
        self.contains_key_hits += 1;
    }

    fn record_contains_key_miss(&mut self) {
        self.contains_key_calls += 1;
    }

    fn record_contains_value_hit(&mut self) {
        self.contains_value_calls += 1;
        self.contains_value_hits += 1;
    }

    fn record_contains_value_miss(&mut self) {
        self.contains_value_calls += 1;
    }

    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_calls += 1;
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_calls += 1;
        self.insert_updates += 1;
    }

    fn record_remove_hit(&mut self) {
        self.remove_calls += 1;
        self.remove_hits += 1;
    }

    fn record_remove_miss(&mut self) {
        self.remove_calls += 1;
    }

    fn record_bulk_insert(&mut self, entries: usize) {
        self.bulk_insert_calls += 1;
        self.bulk_inserted_entries += entries as u64;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }

    fn record_popularity_reset(&mut self) {
        self.popularity_resets += 1;
    }
}

impl PopularMapMetricsReadRecorder for PopularMapMetrics {
    fn record_popular_key_call(&self) {
        self.popular_key_calls.incr();
    }

    fn record_popular_key_found(&self) {
        self.popular_key_found.incr();
    }

    fn record_popular_value_call(&self) {
        self.popular_value_calls.incr();
    }

    fn record_popular_value_found(&self) {
        self.popular_value_found.incr();
    }

    fn record_key_popularity_call(&self) {
        self.key_popularity_calls.incr();
    }

    fn record_value_popularity_call(&self) {
        self.value_popularity_calls.incr();
    }

    fn record_popular_iter_call(&self) {
        self.popular_iter_calls.incr();
    }
}
