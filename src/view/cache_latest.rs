//! Caching view over a single-pass base sequence.
//!
//! [`CacheLatest`] wraps a [`Sequence`] and memoizes the element at the
//! current position, so dereferencing a [`Position`] any number of times runs
//! the base's production step at most once. Advancing drops the cached
//! element.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────┐
//!   │ CacheLatest<S>                             │
//!   │   base:  S                  (owned)        │
//!   │   cache: NonPropagatingCache<S::Item>      │
//!   └───────────────▲────────────────────────────┘
//!                   │ &mut (exclusive)
//!   ┌───────────────┴──────────────┐      ┌────────────────────┐
//!   │ Position<'v, S>              │  ==  │ End<S>             │
//!   │   view:    &'v mut view      │ ◄──► │   end: S::End      │
//!   │   current: S::Cursor         │      └────────────────────┘
//!   └──────────────────────────────┘
//!
//!   Slot state machine:
//!
//!      ┌─────────┐   get() (runs S::read)   ┌────────────┐
//!      │  empty  │ ───────────────────────► │ populated  │ ──┐ get() (no read)
//!      └─────────┘ ◄─────────────────────── └────────────┘ ◄─┘
//!                       advance()
//! ```
//!
//! ## Key Components
//!
//! - [`CacheLatest`]: owns the base and the single cache slot
//! - [`Position`]: move-only cursor; the only thing that fills or clears the slot
//! - [`End`]: end-of-sequence marker captured by [`CacheLatest::end`]
//! - [`IntoIter`]: owning iterator that reads each element once
//!
//! ## Operations
//!
//! | Operation                  | Description                               | Base calls        |
//! |----------------------------|-------------------------------------------|-------------------|
//! | [`begin`]                  | Position at the first element             | `start`           |
//! | [`end`]                    | Capture the end marker                    | `end`             |
//! | [`Position::get`]          | Current element, cached                   | `read` (≤ 1/pos)  |
//! | [`Position::advance`]      | Next position, slot cleared               | `step`            |
//! | [`Position::take`]         | Move the current element out (consumes)   | `read` if empty   |
//! | [`Position::swap_with`]    | Swap with another location                | `swap_at`         |
//! | [`len`]                    | Forwarded element count                   | `len`             |
//!
//! [`begin`]: CacheLatest::begin
//! [`end`]: CacheLatest::end
//! [`len`]: CacheLatest::len
//!
//! ## Non-propagation
//!
//! Cloning a view (or calling [`CacheLatest::relocate`]) never carries the
//! cached element along: the new view starts empty and recomputes on its
//! first dereference.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//!
//! use cache_latest::traits::Sequence;
//! use cache_latest::view::CacheLatest;
//!
//! struct Expensive<'a> {
//!     calls: &'a Cell<u32>,
//! }
//!
//! impl Sequence for Expensive<'_> {
//!     type Item = u64;
//!     type Cursor = u64;
//!     type End = u64;
//!     fn start(&mut self) -> u64 { 0 }
//!     fn end(&self) -> u64 { 3 }
//!     fn read(&mut self, cursor: &u64) -> u64 {
//!         self.calls.set(self.calls.get() + 1);
//!         cursor * 100
//!     }
//!     fn step(&mut self, cursor: &mut u64) { *cursor += 1; }
//!     fn is_end(&self, cursor: &u64, end: &u64) -> bool { cursor == end }
//! }
//!
//! let calls = Cell::new(0);
//! let mut view = CacheLatest::new(Expensive { calls: &calls });
//! let end = view.end();
//! let mut pos = view.begin();
//!
//! assert_eq!(*pos.get(), 0);
//! assert_eq!(*pos.get(), 0);
//! assert_eq!(calls.get(), 1);
//!
//! pos.advance();
//! assert_eq!(*pos.get(), 100);
//! assert_eq!(calls.get(), 2);
//!
//! pos.advance();
//! pos.advance();
//! assert!(pos == end);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::ds::NonPropagatingCache;
use crate::error::AccessError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::CacheLatestMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::CacheLatestMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CacheLatestMetricsReadRecorder, CacheLatestMetricsRecorder, MetricsReset,
    MetricsSnapshotProvider,
};
use crate::traits::{Sequence, SizedSequence, SwapSequence};

/// View that caches the element at the current position of its base.
pub struct CacheLatest<S: Sequence> {
    base: S,
    cache: NonPropagatingCache<S::Item>,
    #[cfg(feature = "metrics")]
    metrics: CacheLatestMetrics,
}

impl<S: Sequence> CacheLatest<S> {
    /// Wraps `base`; the cache starts empty.
    pub fn new(base: S) -> Self {
        Self {
            base,
            cache: NonPropagatingCache::new(),
            #[cfg(feature = "metrics")]
            metrics: CacheLatestMetrics::default(),
        }
    }

    /// Returns a position at the base's first location.
    ///
    /// Clears any element left in the slot by an earlier position, so the slot
    /// always belongs to the position returned here. Does not read the base.
    pub fn begin(&mut self) -> Position<'_, S> {
        #[cfg(feature = "metrics")]
        self.metrics.record_begin();
        self.cache.reset();
        let current = self.base.start();
        Position {
            view: self,
            current,
        }
    }

    /// Returns the base's end marker as of this call.
    pub fn end(&self) -> End<S> {
        End {
            end: self.base.end(),
        }
    }

    /// Returns a shared reference to the wrapped sequence.
    #[inline]
    pub fn base_ref(&self) -> &S {
        &self.base
    }

    /// Consumes the view, relinquishing ownership of the wrapped sequence.
    pub fn into_base(self) -> S {
        self.base
    }

    /// Returns `true` if an element is currently cached.
    #[inline]
    pub fn has_cached(&self) -> bool {
        self.cache.has_value()
    }

    /// Move construction: moves the base into a new view, leaving
    /// `S::default()` behind. Neither view keeps a cached element.
    #[must_use]
    pub fn relocate(&mut self) -> Self
    where
        S: Default,
    {
        Self {
            base: std::mem::take(&mut self.base),
            cache: self.cache.relocate(),
            #[cfg(feature = "metrics")]
            metrics: CacheLatestMetrics::default(),
        }
    }

    // Cursor-level operations shared by `Position` and `IntoIter`.

    fn get_at(&mut self, cursor: &S::Cursor) -> &mut S::Item {
        #[cfg(feature = "metrics")]
        {
            if self.cache.has_value() {
                self.metrics.record_get_hit();
            } else {
                self.metrics.record_get_miss();
            }
        }
        let base = &mut self.base;
        self.cache.get_or_emplace_with(|| base.read(cursor))
    }

    fn advance_at(&mut self, cursor: &mut S::Cursor) {
        #[cfg(feature = "metrics")]
        {
            self.metrics.record_advance();
            if self.cache.has_value() {
                self.metrics.record_cache_reset();
            }
        }
        self.base.step(cursor);
        self.cache.reset();
    }

    fn take_at(&mut self, cursor: &S::Cursor) -> S::Item {
        #[cfg(feature = "metrics")]
        self.metrics.record_take_call();
        match self.cache.take() {
            Some(item) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_take_hit();
                item
            },
            None => self.base.read(cursor),
        }
    }
}

impl<S: Sequence + Clone> CacheLatest<S> {
    /// Returns a copy of the wrapped sequence.
    pub fn base(&self) -> S {
        self.base.clone()
    }
}

impl<S: SizedSequence> CacheLatest<S> {
    /// Returns the base's element count.
    pub fn len(&self) -> usize {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_len_call();
        self.base.len()
    }

    /// Returns `true` if the base has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "metrics")]
impl<S: Sequence> CacheLatest<S> {
    pub fn metrics_snapshot(&self) -> CacheLatestMetricsSnapshot {
        CacheLatestMetricsSnapshot {
            begin_calls: self.metrics.begin_calls,
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            advance_calls: self.metrics.advance_calls,
            cache_resets: self.metrics.cache_resets,
            take_calls: self.metrics.take_calls,
            take_hits: self.metrics.take_hits,
            swap_calls: self.metrics.swap_calls,
            len_calls: self.metrics.len_calls.get(),
            cache_populated: self.cache.has_value(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<S: Sequence> MetricsSnapshotProvider<CacheLatestMetricsSnapshot> for CacheLatest<S> {
    fn snapshot(&self) -> CacheLatestMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<S: Sequence> MetricsReset for CacheLatest<S> {
    fn reset_metrics(&mut self) {
        self.metrics.clear();
    }
}

impl<S: Sequence + Clone> Clone for CacheLatest<S> {
    /// Copies the base; the copy's cache is empty.
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            cache: self.cache.clone(),
            #[cfg(feature = "metrics")]
            metrics: CacheLatestMetrics::default(),
        }
    }
}

impl<S: Sequence + Default> Default for CacheLatest<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Sequence + fmt::Debug> fmt::Debug for CacheLatest<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheLatest")
            .field("base", &self.base)
            .field("cache", &self.cache)
            .finish()
    }
}

/// Move-only cursor over one [`CacheLatest`].
///
/// Holds the view exclusively, so at most one position per view is live at a
/// time and the view cannot be moved or cloned while it exists.
///
/// Elements are only lent out shared. For reference items a mutable borrow
/// would let the cached reference be re-pointed away from the current element:
///
/// ```compile_fail
/// use cache_latest::prelude::*;
///
/// let data = [1, 2];
/// let other = 9;
/// let mut view = data[..].cache_latest();
/// let mut pos = view.begin();
/// *pos.get_mut() = &other;
/// ```
pub struct Position<'v, S: Sequence> {
    view: &'v mut CacheLatest<S>,
    current: S::Cursor,
}

impl<'v, S: Sequence> Position<'v, S> {
    /// Returns the current element, producing and caching it on first access.
    ///
    /// Dereferencing a position that has reached the end marker is a caller
    /// bug; what happens is up to the base's `read` (the provided bases
    /// panic). See [`try_get`](Self::try_get) for a checked variant.
    pub fn get(&mut self) -> &S::Item {
        self.view.get_at(&self.current)
    }

    /// Like [`get`](Self::get), but reports an [`AccessError`] instead of
    /// reading past `end`.
    pub fn try_get(&mut self, end: &End<S>) -> Result<&S::Item, AccessError> {
        if self.is_at(end) {
            return Err(AccessError::new(
                "dereferenced a position that reached the end marker",
            ));
        }
        Ok(self.get())
    }

    /// Moves to the next element and clears the cache.
    pub fn advance(&mut self) {
        self.view.advance_at(&mut self.current);
    }

    /// Moves the current element out, consuming the position.
    ///
    /// Uses the cached element when present; otherwise produces one from the
    /// base without caching it. Either way the element is produced at most
    /// once: the position is gone afterwards, so nothing can read the base
    /// again at the same cursor. Call [`CacheLatest::begin`] for a new one.
    ///
    /// ```compile_fail
    /// use cache_latest::prelude::*;
    ///
    /// let mut view = Stream::new(vec![1, 2]).cache_latest();
    /// let mut pos = view.begin();
    /// let first = pos.take();
    /// pos.get();
    /// ```
    pub fn take(self) -> S::Item {
        self.view.take_at(&self.current)
    }

    /// Returns `true` if this position has reached `end`.
    #[inline]
    pub fn is_at(&self, end: &End<S>) -> bool {
        self.view.base.is_end(&self.current, &end.end)
    }

    /// Returns the base cursor.
    #[inline]
    pub fn cursor(&self) -> &S::Cursor {
        &self.current
    }

    /// Consumes the position, returning the base cursor.
    pub fn into_cursor(self) -> S::Cursor {
        self.current
    }
}

impl<S: SwapSequence> Position<'_, S> {
    /// Swaps the element at this position with the one at `other`.
    ///
    /// The cache is cleared so the next [`get`](Self::get) sees the swapped-in
    /// element.
    pub fn swap_with(&mut self, other: &S::Cursor) {
        #[cfg(feature = "metrics")]
        self.view.metrics.record_swap_call();
        self.view.base.swap_at(&self.current, other);
        self.view.cache.reset();
    }
}

impl<S: Sequence> PartialEq<End<S>> for Position<'_, S> {
    fn eq(&self, other: &End<S>) -> bool {
        self.is_at(other)
    }
}

impl<S: Sequence> PartialEq<Position<'_, S>> for End<S> {
    fn eq(&self, other: &Position<'_, S>) -> bool {
        other.is_at(self)
    }
}

impl<S: Sequence> fmt::Debug for Position<'_, S>
where
    S::Cursor: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("current", &self.current)
            .field("cached", &self.view.cache.has_value())
            .finish()
    }
}

/// End-of-sequence marker captured by [`CacheLatest::end`].
pub struct End<S: Sequence> {
    end: S::End,
}

impl<S: Sequence> End<S> {
    /// Returns the captured base end marker.
    #[inline]
    pub fn base(&self) -> &S::End {
        &self.end
    }

    /// Consumes the marker, returning the base end marker.
    pub fn into_base(self) -> S::End {
        self.end
    }
}

impl<S: Sequence> Clone for End<S>
where
    S::End: Clone,
{
    fn clone(&self) -> Self {
        Self {
            end: self.end.clone(),
        }
    }
}

impl<S: Sequence> fmt::Debug for End<S>
where
    S::End: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("End").field("end", &self.end).finish()
    }
}

/// Owning iterator over a [`CacheLatest`].
///
/// Reads each element exactly once, moving it out of the slot, so iterating
/// yields the same elements in the same order as the base.
pub struct IntoIter<S: Sequence> {
    view: CacheLatest<S>,
    current: S::Cursor,
    end: S::End,
}

impl<S: Sequence> IntoIter<S> {
    /// Returns the view being iterated.
    pub fn view(&self) -> &CacheLatest<S> {
        &self.view
    }
}

impl<S: Sequence> Iterator for IntoIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.view.base.is_end(&self.current, &self.end) {
            return None;
        }
        let item = self.view.take_at(&self.current);
        self.view.advance_at(&mut self.current);
        Some(item)
    }
}

impl<S: Sequence> FusedIterator for IntoIter<S> {}

impl<S: Sequence> IntoIterator for CacheLatest<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;

    fn into_iter(mut self) -> IntoIter<S> {
        #[cfg(feature = "metrics")]
        self.metrics.record_begin();
        self.cache.reset();
        let end = self.base.end();
        let current = self.base.start();
        IntoIter {
            view: self,
            current,
            end,
        }
    }
}

/// Wraps `base` in a [`CacheLatest`].
pub fn cache_latest<S: Sequence>(base: S) -> CacheLatest<S> {
    CacheLatest::new(base)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::seq::Stream;

    /// `0..n` mapped through `x * 10`, counting every production step.
    #[derive(Clone, Default)]
    struct Counted {
        n: u64,
        reads: Rc<Cell<usize>>,
    }

    impl Counted {
        fn new(n: u64) -> Self {
            Self {
                n,
                reads: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Sequence for Counted {
        type Item = u64;
        type Cursor = u64;
        type End = u64;

        fn start(&mut self) -> u64 {
            0
        }

        fn end(&self) -> u64 {
            self.n
        }

        fn read(&mut self, cursor: &u64) -> u64 {
            self.reads.set(self.reads.get() + 1);
            cursor * 10
        }

        fn step(&mut self, cursor: &mut u64) {
            *cursor += 1;
        }

        fn is_end(&self, cursor: &u64, end: &u64) -> bool {
            cursor == end
        }
    }

    impl SizedSequence for Counted {
        fn len(&self) -> usize {
            self.n as usize
        }
    }

    #[test]
    fn repeated_get_reads_base_once() {
        let base = Counted::new(3);
        let reads = base.reads.clone();
        let mut view = CacheLatest::new(base);
        let mut pos = view.begin();
        for _ in 0..5 {
            assert_eq!(*pos.get(), 0);
        }
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn begin_does_not_read() {
        let base = Counted::new(3);
        let reads = base.reads.clone();
        let mut view = CacheLatest::new(base);
        let pos = view.begin();
        drop(pos);
        assert_eq!(reads.get(), 0);
        assert!(!view.has_cached());
    }

    #[test]
    fn advance_invalidates_cache() {
        let base = Counted::new(3);
        let reads = base.reads.clone();
        let mut view = CacheLatest::new(base);
        let mut pos = view.begin();
        assert_eq!(*pos.get(), 0);
        pos.advance();
        assert_eq!(*pos.get(), 10);
        assert_eq!(*pos.get(), 10);
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn advance_without_get_never_reads() {
        let base = Counted::new(4);
        let reads = base.reads.clone();
        let mut view = CacheLatest::new(base);
        let end = view.end();
        let mut pos = view.begin();
        while pos != end {
            pos.advance();
        }
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn exactly_len_advances_reach_end() {
        let mut view = CacheLatest::new(Counted::new(3));
        let end = view.end();
        let mut pos = view.begin();
        let mut steps = 0;
        while pos != end {
            pos.advance();
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert!(end == pos);
    }

    #[test]
    fn empty_base_starts_at_end() {
        let mut view = CacheLatest::new(Counted::new(0));
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        let end = view.end();
        let pos = view.begin();
        assert!(pos == end);
    }

    #[test]
    fn len_forwards_base_count() {
        let view = CacheLatest::new(Counted::new(7));
        assert_eq!(view.len(), 7);
        assert!(!view.is_empty());
    }

    #[test]
    fn try_get_reports_end() {
        let mut view = CacheLatest::new(0usize..1);
        let end = view.end();
        let mut pos = view.begin();
        assert_eq!(pos.try_get(&end), Ok(&0));
        pos.advance();
        let err = pos.try_get(&end).unwrap_err();
        assert!(err.message().contains("end marker"));
    }

    #[test]
    fn take_prefers_cached_element() {
        let base = Counted::new(2);
        let reads = base.reads.clone();
        let mut view = CacheLatest::new(base);
        let mut pos = view.begin();
        assert_eq!(*pos.get(), 0);
        assert_eq!(pos.take(), 0);
        assert_eq!(reads.get(), 1);
        assert!(!view.has_cached());
    }

    #[test]
    fn take_on_empty_slot_reads_without_caching() {
        let base = Counted::new(2);
        let reads = base.reads.clone();
        let mut view = CacheLatest::new(base);
        let mut pos = view.begin();
        pos.advance();
        assert_eq!(pos.take(), 10);
        assert_eq!(reads.get(), 1);
        assert!(!view.has_cached());
    }

    #[test]
    fn take_from_stream_pulls_element_once() {
        let mut view = CacheLatest::new(Stream::new(vec![String::from("a"), String::from("b")]));
        let mut pos = view.begin();
        assert_eq!(pos.get(), "a");
        assert_eq!(pos.take(), "a");

        let pos = view.begin();
        assert_eq!(pos.take(), "b");
        assert_eq!(view.base_ref().pulled(), 2);
    }

    #[test]
    fn take_without_get_on_stream_reads_once() {
        let mut view = CacheLatest::new(Stream::new(vec![7, 8]));
        let end = view.end();
        let mut pos = view.begin();
        pos.advance();
        assert_eq!(pos.take(), 8);

        let pos = view.begin();
        assert!(pos == end);
    }

    #[test]
    fn swap_with_clears_stale_element() {
        let mut view = CacheLatest::new(vec!['a', 'b', 'c']);
        let mut pos = view.begin();
        assert_eq!(*pos.get(), 'a');
        pos.swap_with(&2);
        assert_eq!(*pos.get(), 'c');
        drop(pos);
        assert_eq!(view.into_base(), vec!['c', 'b', 'a']);
    }

    #[test]
    fn slice_base_returns_same_address() {
        let data = [String::from("x"), String::from("y")];
        let mut view = CacheLatest::new(&data[..]);
        let mut pos = view.begin();
        let first: &String = *pos.get();
        let second: &String = *pos.get();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(first, &data[0]));
    }

    #[test]
    fn clone_starts_with_empty_cache() {
        let base = Counted::new(3);
        let reads = base.reads.clone();
        let mut view = CacheLatest::new(base);
        {
            let mut pos = view.begin();
            pos.get();
        }
        assert!(view.has_cached());

        let mut copy = view.clone();
        assert!(!copy.has_cached());
        assert!(view.has_cached());

        let mut pos = copy.begin();
        assert_eq!(*pos.get(), 0);
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn relocate_empties_both_views() {
        let mut view = CacheLatest::new(Counted::new(3));
        {
            let mut pos = view.begin();
            pos.get();
        }
        let moved = view.relocate();
        assert!(!moved.has_cached());
        assert!(!view.has_cached());
        assert_eq!(moved.len(), 3);
        assert_eq!(view.len(), 0);
    }

    #[test]
    fn begin_discards_element_from_previous_position() {
        let mut view = CacheLatest::new(0usize..3);
        {
            let mut pos = view.begin();
            pos.advance();
            assert_eq!(*pos.get(), 1);
        }
        let mut pos = view.begin();
        assert_eq!(*pos.get(), 0);
    }

    #[test]
    fn base_by_copy_and_by_move() {
        let view = CacheLatest::new(vec![1, 2, 3]);
        assert_eq!(view.base(), vec![1, 2, 3]);
        assert_eq!(view.into_base(), vec![1, 2, 3]);
    }

    #[test]
    fn default_view_wraps_default_base() {
        let view: CacheLatest<Vec<u8>> = CacheLatest::default();
        assert!(view.is_empty());
        assert!(!view.has_cached());
    }

    #[test]
    fn end_marker_exposes_base_end() {
        let view = CacheLatest::new(5u32..9);
        let end = view.end();
        assert_eq!(*end.base(), 9);
        assert_eq!(end.clone().into_base(), 9);
    }

    #[test]
    fn position_cursor_accessors() {
        let mut view = CacheLatest::new(3u64..6);
        let mut pos = view.begin();
        assert_eq!(*pos.cursor(), 3);
        pos.advance();
        assert_eq!(pos.into_cursor(), 4);
    }

    #[test]
    fn stream_base_supports_repeated_get() {
        let mut view = CacheLatest::new(Stream::new(vec![String::from("a"), String::from("b")]));
        let end = view.end();
        let mut pos = view.begin();
        let mut seen = Vec::new();
        while pos != end {
            let first = pos.get().clone();
            assert_eq!(pos.get(), &first);
            seen.push(first);
            pos.advance();
        }
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn into_iter_matches_base_order() {
        let base = Counted::new(4);
        let reads = base.reads.clone();
        let items: Vec<u64> = CacheLatest::new(base).into_iter().collect();
        assert_eq!(items, vec![0, 10, 20, 30]);
        assert_eq!(reads.get(), 4);
    }

    #[test]
    fn into_iter_is_fused() {
        let mut iter = CacheLatest::new(0usize..1).into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert!(!iter.view().has_cached());
    }

    #[test]
    fn debug_output_reports_cache_state() {
        let mut view = CacheLatest::new(0usize..2);
        {
            let mut pos = view.begin();
            pos.get();
            let dbg = format!("{:?}", pos);
            assert!(dbg.contains("cached: true"));
        }
        let dbg = format!("{:?}", view);
        assert!(dbg.contains("has_value: true"));
    }

    #[test]
    fn cache_latest_fn_wraps_base() {
        let view = cache_latest(0usize..4);
        assert_eq!(view.len(), 4);
    }
}
