pub use crate::ds::NonPropagatingCache;
pub use crate::error::AccessError;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::CacheLatestMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
pub use crate::pipeline::{Compose, SequenceExt, Stage};
pub use crate::seq::Stream;
pub use crate::traits::{Sequence, SizedSequence, SwapSequence};
pub use crate::view::{CacheLatest, End, Position};
