use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{CacheLatestMetricsReadRecorder, CacheLatestMetricsRecorder};

/// Per-view counters.
#[derive(Debug, Default)]
pub struct CacheLatestMetrics {
    pub begin_calls: u64,
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub advance_calls: u64,
    pub cache_resets: u64,
    pub take_calls: u64,
    pub take_hits: u64,
    pub swap_calls: u64,
    pub len_calls: MetricsCell,
}

impl CacheLatestMetrics {
    pub fn new() -> CacheLatestMetrics {
        Self::default()
    }

    /// Zeroes every counter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl CacheLatestMetricsRecorder for CacheLatestMetrics {
    fn record_begin(&mut self) {
        self.begin_calls += 1;
    }

    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_advance(&mut self) {
        self.advance_calls += 1;
    }

    fn record_cache_reset(&mut self) {
        self.cache_resets += 1;
    }

    fn record_take_call(&mut self) {
        self.take_calls += 1;
    }

    fn record_take_hit(&mut self) {
        self.take_hits += 1;
    }

    fn record_swap_call(&mut self) {
        self.swap_calls += 1;
    }
}

impl CacheLatestMetricsReadRecorder for &CacheLatestMetrics {
    fn record_len_call(&self) {
        self.len_calls.incr();
    }
}
