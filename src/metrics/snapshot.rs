/// Point-in-time copy of a view's counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheLatestMetricsSnapshot {
    pub begin_calls: u64,

    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64, // production steps run by the view

    pub advance_calls: u64,
    pub cache_resets: u64, // advances that dropped a populated slot

    pub take_calls: u64,
    pub take_hits: u64,
    pub swap_calls: u64,
    pub len_calls: u64,

    // gauge captured at snapshot time
    pub cache_populated: bool,
}

impl CacheLatestMetricsSnapshot {
    /// Fraction of dereferences served from the slot, or `0.0` with no calls.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
