//! Single-slot cache whose contents never follow a copy or a move.
//!
//! A `NonPropagatingCache<T>` holds at most one `T`. Every copy or move event
//! produces an empty container, so a value cached on behalf of one owner can
//! never leak into another. The owning view relies on this to keep its slot
//! tied to its own iteration position.
//!
//! ## Architecture
//!
//! ```text
//!   source                      destination
//!   ┌──────────────┐            ┌──────────────┐
//!   │ slot: Some(v)│  clone()   │ slot: None   │   source untouched
//!   └──────────────┘ ─────────► └──────────────┘
//!
//!   ┌──────────────┐            ┌──────────────┐
//!   │ slot: Some(v)│ relocate() │ slot: None   │   source cleared
//!   └──────────────┘ ─────────► └──────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation          | Models                 | Destination | Source    |
//! |--------------------|------------------------|-------------|-----------|
//! | `clone`            | copy construction      | empty       | unchanged |
//! | [`relocate`]       | move construction      | empty       | cleared   |
//! | [`assign_from`]    | copy assignment        | cleared     | unchanged |
//! | [`assign_take`]    | move assignment        | cleared     | cleared   |
//! | [`emplace`]        | store a value          | populated   | -         |
//! | [`reset`]          | clear                  | empty       | -         |
//!
//! Rust moves are bitwise and cannot run code, so move construction and move
//! assignment are explicit methods rather than language hooks.
//!
//! [`relocate`]: NonPropagatingCache::relocate
//! [`assign_from`]: NonPropagatingCache::assign_from
//! [`assign_take`]: NonPropagatingCache::assign_take
//! [`emplace`]: NonPropagatingCache::emplace
//! [`reset`]: NonPropagatingCache::reset
//!
//! ## Example Usage
//!
//! ```
//! use cache_latest::ds::NonPropagatingCache;
//!
//! let mut cache = NonPropagatingCache::new();
//! cache.emplace(String::from("expensive"));
//! assert!(cache.has_value());
//!
//! let copy = cache.clone();
//! assert!(!copy.has_value());
//! assert!(cache.has_value());
//!
//! let moved = cache.relocate();
//! assert!(!moved.has_value());
//! assert!(!cache.has_value());
//! ```

use std::fmt;

use crate::error::AccessError;

/// Optional single value that is dropped, never transferred, on copy or move.
pub struct NonPropagatingCache<T> {
    slot: Option<T>,
}

impl<T> NonPropagatingCache<T> {
    /// Creates an empty cache.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Returns `true` if a value is currently stored.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns the stored value.
    ///
    /// # Panics
    ///
    /// Panics if the cache is empty. Check [`has_value`](Self::has_value)
    /// first, or use [`get`](Self::get) / [`try_value`](Self::try_value).
    #[inline]
    pub fn value(&self) -> &T {
        match &self.slot {
            Some(value) => value,
            None => panic!("NonPropagatingCache::value called on an empty cache"),
        }
    }

    /// Returns the stored value, or an [`AccessError`] if the cache is empty.
    pub fn try_value(&self) -> Result<&T, AccessError> {
        self.slot
            .as_ref()
            .ok_or_else(|| AccessError::new("cache slot is empty"))
    }

    /// Returns the stored value if present.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Returns a mutable reference to the stored value if present.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// Stores `value`, dropping any previous one, and returns a reference to it.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.slot.insert(value)
    }

    /// Drops any previous value, then stores the result of `make`.
    ///
    /// The old value is gone before `make` runs, so a panicking `make`
    /// leaves the cache empty.
    pub fn emplace_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        self.slot = None;
        self.slot.insert(make())
    }

    /// Returns the stored value, computing and storing it with `make` if empty.
    #[inline]
    pub fn get_or_emplace_with(&mut self, make: impl FnOnce() -> T) -> &mut T {
        self.slot.get_or_insert_with(make)
    }

    /// Clears the stored value; no-op when already empty.
    #[inline]
    pub fn reset(&mut self) {
        self.slot = None;
    }

    /// Moves the stored value out, leaving the cache empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }

    /// Move construction: returns an empty cache and clears `self`.
    #[must_use]
    pub fn relocate(&mut self) -> Self {
        self.reset();
        Self::new()
    }

    /// Copy assignment: clears `self`; `source` is left untouched.
    pub fn assign_from(&mut self, source: &Self) {
        let _ = source;
        self.reset();
    }

    /// Move assignment: clears both `self` and `source`.
    pub fn assign_take(&mut self, source: &mut Self) {
        source.reset();
        self.reset();
    }
}

impl<T> Clone for NonPropagatingCache<T> {
    /// Copy construction always yields an empty cache.
    fn clone(&self) -> Self {
        Self::new()
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T> Default for NonPropagatingCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for NonPropagatingCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonPropagatingCache")
            .field("has_value", &self.has_value())
            .finish()
    }
}
