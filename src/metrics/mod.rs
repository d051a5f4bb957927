//! Optional counters for [`CacheLatest`](crate::view::CacheLatest).
//!
//! Compiled only with the `metrics` feature. Recording, snapshotting, and
//! export are split across small traits so the view only ever writes
//! counters; reading and publishing happen elsewhere.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
