pub mod cache_latest;

pub use cache_latest::{CacheLatest, End, IntoIter, Position, cache_latest};
