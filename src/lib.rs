//! cache-latest: a caching view over single-pass sequences.
//!
//! [`CacheLatest`](view::CacheLatest) wraps a base [`Sequence`](traits::Sequence)
//! and memoizes the element at the current position. Dereferencing the same
//! position any number of times runs the base's production step at most
//! once; advancing drops the cached element. The single cache slot is a
//! [`NonPropagatingCache`](ds::NonPropagatingCache), which is never carried
//! along when the view is cloned or relocated.
//!
//! ```
//! use cache_latest::prelude::*;
//!
//! let words = ["alpha", "beta", "gamma"];
//! let mut view = words[..].cache_latest();
//! let end = view.end();
//! let mut pos = view.begin();
//! let mut lengths = Vec::new();
//! while pos != end {
//!     lengths.push(pos.get().len());
//!     pos.advance();
//! }
//! assert_eq!(lengths, vec![5, 4, 5]);
//! ```

pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod pipeline;
pub mod prelude;
pub mod seq;
pub mod traits;
pub mod view;
