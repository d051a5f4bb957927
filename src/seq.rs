//! [`Sequence`] implementations for standard types.
//!
//! These adapters let ordinary Rust values act as base sequences. None of
//! them transform elements; they only expose the start/read/step protocol.
//!
//! | Base             | `Item`   | Sized | Swap | Notes                          |
//! |------------------|----------|-------|------|--------------------------------|
//! | `&'a [T]`        | `&'a T`  | yes   | no   | reference items                |
//! | `&'a Vec<T>`     | `&'a T`  | yes   | no   | same as the slice              |
//! | `Vec<T: Clone>`  | `T`      | yes   | yes  | `read` clones the element      |
//! | `Range<usize>`…  | integer  | yes   | no   | `usize`, `u32`, `u64`          |
//! | [`Stream<I>`]    | `I::Item`| no    | no   | any single-pass `Iterator`     |

use std::fmt;
use std::ops::Range;

use crate::traits::{Sequence, SizedSequence, SwapSequence};

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;
    type Cursor = usize;
    type End = usize;

    fn start(&mut self) -> usize {
        0
    }

    fn end(&self) -> usize {
        <[T]>::len(self)
    }

    fn read(&mut self, cursor: &usize) -> &'a T {
        let slice: &'a [T] = *self;
        &slice[*cursor]
    }

    fn step(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    fn is_end(&self, cursor: &usize, end: &usize) -> bool {
        cursor == end
    }
}

impl<T> SizedSequence for &[T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Item = &'a T;
    type Cursor = usize;
    type End = usize;

    fn start(&mut self) -> usize {
        0
    }

    fn end(&self) -> usize {
        Vec::len(self)
    }

    fn read(&mut self, cursor: &usize) -> &'a T {
        let vec: &'a Vec<T> = *self;
        &vec[*cursor]
    }

    fn step(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    fn is_end(&self, cursor: &usize, end: &usize) -> bool {
        cursor == end
    }
}

impl<T> SizedSequence for &Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor = usize;
    type End = usize;

    fn start(&mut self) -> usize {
        0
    }

    fn end(&self) -> usize {
        Vec::len(self)
    }

    fn read(&mut self, cursor: &usize) -> T {
        self[*cursor].clone()
    }

    fn step(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    fn is_end(&self, cursor: &usize, end: &usize) -> bool {
        cursor == end
    }
}

impl<T: Clone> SizedSequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Clone> SwapSequence for Vec<T> {
    fn swap_at(&mut self, a: &usize, b: &usize) {
        self.swap(*a, *b);
    }
}

macro_rules! impl_range_sequence {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sequence for Range<$t> {
                type Item = $t;
                type Cursor = $t;
                type End = $t;

                // A reversed range starts at its end, like the std iterator.
                fn start(&mut self) -> $t {
                    self.start.min(self.end)
                }

                fn end(&self) -> $t {
                    self.end
                }

                fn read(&mut self, cursor: &$t) -> $t {
                    *cursor
                }

                fn step(&mut self, cursor: &mut $t) {
                    *cursor += 1;
                }

                fn is_end(&self, cursor: &$t, end: &$t) -> bool {
                    cursor == end
                }
            }

            impl SizedSequence for Range<$t> {
                fn len(&self) -> usize {
                    usize::try_from(self.end.saturating_sub(self.start)).unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

impl_range_sequence!(usize, u32, u64);

/// Single-pass base over any `Iterator`.
///
/// The iterator is pulled once on `start` and once per `step`; the pulled
/// element is handed out by the next `read`. Each element is therefore
/// produced exactly once whether or not anyone reads it, and a second `read`
/// at the same position panics. Wrapping a `Stream` in a
/// [`CacheLatest`](crate::view::CacheLatest) makes repeated reads legal.
pub struct Stream<I: Iterator> {
    iter: I,
    pending: Option<I::Item>,
    exhausted: bool,
    pulled: usize,
}

impl<I: Iterator> Stream<I> {
    /// Wraps anything that can be turned into an iterator.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: iter.into_iter(),
            pending: None,
            exhausted: false,
            pulled: 0,
        }
    }

    /// Returns how many elements have been pulled from the iterator.
    pub fn pulled(&self) -> usize {
        self.pulled
    }

    /// Consumes the stream, returning the underlying iterator.
    ///
    /// An element pulled but not yet read is dropped.
    pub fn into_inner(self) -> I {
        self.iter
    }

    fn pull(&mut self) {
        self.pending = self.iter.next();
        self.exhausted = self.pending.is_none();
        if !self.exhausted {
            self.pulled += 1;
        }
    }
}

impl<I: Iterator> Sequence for Stream<I> {
    type Item = I::Item;
    type Cursor = usize;
    type End = ();

    fn start(&mut self) -> usize {
        self.pull();
        0
    }

    fn end(&self) {}

    fn read(&mut self, cursor: &usize) -> I::Item {
        match self.pending.take() {
            Some(item) => item,
            None => panic!("Stream::read at position {cursor}: element already read or stream ended"),
        }
    }

    fn step(&mut self, cursor: &mut usize) {
        *cursor += 1;
        self.pull();
    }

    fn is_end(&self, _cursor: &usize, _end: &()) -> bool {
        self.exhausted
    }
}

impl<I: Iterator> fmt::Debug for Stream<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("pending", &self.pending.is_some())
            .field("exhausted", &self.exhausted)
            .field("pulled", &self.pulled)
            .finish()
    }
}
