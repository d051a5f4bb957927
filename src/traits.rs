//! # Base Sequence Trait Hierarchy
//!
//! This module defines the capability contract a base sequence must satisfy
//! to be wrapped by [`CacheLatest`](crate::view::CacheLatest), plus the
//! optional capabilities that unlock extra operations on the view.
//!
//! ## Architecture
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                Sequence                      │
//!                    │                                              │
//!                    │  type Item / Cursor / End                    │
//!                    │  start(&mut) → Cursor                        │
//!                    │  end(&) → End                                │
//!                    │  read(&mut, &Cursor) → Item   (production)   │
//!                    │  step(&mut, &mut Cursor)                     │
//!                    │  is_end(&, &Cursor, &End) → bool             │
//!                    └──────────────────────┬───────────────────────┘
//!                                           │
//!                 ┌─────────────────────────┴──────────────────────┐
//!                 ▼                                                ▼
//!   ┌──────────────────────────────┐               ┌──────────────────────────────┐
//!   │       SizedSequence          │               │        SwapSequence          │
//!   │                              │               │                              │
//!   │  len(&) → usize   O(1)       │               │  swap_at(&mut, &Cursor,      │
//!   │  is_empty(&) → bool          │               │          &Cursor)            │
//!   │                              │               │                              │
//!   │  unlocks CacheLatest::len    │               │  unlocks Position::swap_with │
//!   └──────────────────────────────┘               └──────────────────────────────┘
//! ```
//!
//! ## Why `read` Is Separate From `step`
//!
//! A Rust `Iterator` fuses "move forward" and "produce the element" into one
//! `next` call. The view needs them apart: advancing must not pay for an
//! element nobody looks at, and looking twice must not pay twice. `step`
//! only moves the cursor; `read` is the (possibly expensive, possibly
//! side-effecting) production step the view memoizes.
//!
//! ## Reference vs Value Items
//!
//! | `Item`        | Example base        | What the view caches             |
//! |---------------|---------------------|----------------------------------|
//! | `&'a T`       | `&'a [T]`           | the reference (element address)  |
//! | `T`           | `Range<u64>`, `Vec` | the produced value itself        |
//!
//! A reference item borrows storage that outlives the view, so caching it is
//! just caching an address; repeated reads hand back the same address.
//!
//! ## Example Usage
//!
//! ```
//! use cache_latest::traits::{Sequence, SizedSequence};
//!
//! /// Squares of `0..n`, computed on demand.
//! struct Squares {
//!     n: u64,
//! }
//!
//! impl Sequence for Squares {
//!     type Item = u64;
//!     type Cursor = u64;
//!     type End = u64;
//!
//!     fn start(&mut self) -> u64 {
//!         0
//!     }
//!     fn end(&self) -> u64 {
//!         self.n
//!     }
//!     fn read(&mut self, cursor: &u64) -> u64 {
//!         cursor * cursor
//!     }
//!     fn step(&mut self, cursor: &mut u64) {
//!         *cursor += 1;
//!     }
//!     fn is_end(&self, cursor: &u64, end: &u64) -> bool {
//!         cursor == end
//!     }
//! }
//!
//! impl SizedSequence for Squares {
//!     fn len(&self) -> usize {
//!         self.n as usize
//!     }
//! }
//!
//! let mut squares = Squares { n: 3 };
//! let mut cursor = squares.start();
//! assert_eq!(squares.read(&cursor), 0);
//! squares.step(&mut cursor);
//! squares.step(&mut cursor);
//! assert_eq!(squares.read(&cursor), 4);
//! squares.step(&mut cursor);
//! assert!(squares.is_end(&cursor, &squares.end()));
//! ```

/// Single-pass forward sequence with a separate production step.
///
/// Implementors only need to support one pass: `start` may be called once,
/// then `step` repeatedly until `is_end` reports the end marker.
pub trait Sequence {
    /// Element produced by [`read`](Sequence::read).
    type Item;
    /// Location within the sequence.
    type Cursor;
    /// End-of-sequence marker compared against cursors.
    type End;

    /// Returns a cursor at the first location.
    fn start(&mut self) -> Self::Cursor;

    /// Returns the end-of-sequence marker as of now.
    fn end(&self) -> Self::End;

    /// Produces the element at `cursor`.
    ///
    /// This is the step the view runs at most once per position. Calling it
    /// with a cursor that has reached the end is a caller bug; implementations
    /// may panic.
    fn read(&mut self, cursor: &Self::Cursor) -> Self::Item;

    /// Moves `cursor` forward by one location.
    fn step(&mut self, cursor: &mut Self::Cursor);

    /// Returns `true` if `cursor` has reached `end`.
    fn is_end(&self, cursor: &Self::Cursor, end: &Self::End) -> bool;
}

/// Sequence that reports its element count in constant time.
pub trait SizedSequence: Sequence {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sequence whose elements can be exchanged between two locations.
pub trait SwapSequence: Sequence {
    /// Swaps the elements at `a` and `b`.
    fn swap_at(&mut self, a: &Self::Cursor, b: &Self::Cursor);
}
