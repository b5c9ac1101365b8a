#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PopularMapMetricsSnapshot {
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
    pub bulk_inserted_entries: u64, // entries passed to extend/insert_all, counted before dedup
    pub clear_calls: u64,
    pub popularity_resets: u64,

    pub popular_key_calls: u64,
    pub popular_key_found: u64,
    pub popular_value_calls: u64,
    pub popular_value_found: u64,
    pub key_popularity_calls: u64,
    pub value_popularity_calls: u64,
    pub popular_iter_calls: u64,

    // gauges captured at snapshot time
    pub store_len: usize,
    pub tracked_keys: usize,
    pub tracked_values: usize,
}
