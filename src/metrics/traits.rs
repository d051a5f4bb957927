//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting, and export are separate responsibilities so that
//! the view's hot path only ever increments counters.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────┐   ┌─────────────────────────────────┐
//!   │  CacheLatestMetricsRecorder     │   │ CacheLatestMetricsReadRecorder  │
//!   │  (&mut self, position ops)      │   │ (&self, read-only view ops)     │
//!   │  begin / get hit+miss / advance │   │ len                             │
//!   │  cache reset / take / swap      │   │                                 │
//!   └────────────────┬────────────────┘   └────────────────┬────────────────┘
//!                    └──────────────┬──────────────────────┘
//!                                   ▼
//!                        ┌──────────────────────┐
//!                        │  CacheLatestMetrics  │
//!                        └──────────┬───────────┘
//!                                   │ snapshot()
//!              ┌────────────────────┴─────────────────────┐
//!              ▼                                          ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters written by position operations.
pub trait CacheLatestMetricsRecorder {
    fn record_begin(&mut self);
    /// Dereference served from the slot.
    fn record_get_hit(&mut self);
    /// Dereference that ran the base's production step.
    fn record_get_miss(&mut self);
    fn record_advance(&mut self);
    /// Advance that discarded a populated slot.
    fn record_cache_reset(&mut self);
    fn record_take_call(&mut self);
    /// `take` satisfied by moving the cached element out.
    fn record_take_hit(&mut self);
    fn record_swap_call(&mut self);
}

/// Counters written through `&self` (interior mutability).
pub trait CacheLatestMetricsReadRecorder {
    fn record_len_call(&self);
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
