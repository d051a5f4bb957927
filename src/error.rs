//! Error types for the cache-latest library.
//!
//! The unchecked accessors (`NonPropagatingCache::value`, `Position::get`)
//! treat misuse as a caller bug and panic. The checked variants report the
//! same conditions through [`AccessError`] instead.
//!
//! ## Example Usage
//!
//! ```
//! use cache_latest::ds::NonPropagatingCache;
//! use cache_latest::error::AccessError;
//!
//! let cache: NonPropagatingCache<u32> = NonPropagatingCache::new();
//! let err: AccessError = cache.try_value().unwrap_err();
//! assert!(err.message().contains("empty"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// AccessError
// ---------------------------------------------------------------------------

/// Error returned by checked accessors when a read precondition does not hold.
///
/// Produced by [`NonPropagatingCache::try_value`](crate::ds::NonPropagatingCache::try_value)
/// on an empty slot and by [`Position::try_get`](crate::view::Position::try_get)
/// on a position that already reached its end marker. Carries a human-readable
/// description of the violated precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError(String);

impl AccessError {
    /// Creates a new `AccessError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for AccessError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
