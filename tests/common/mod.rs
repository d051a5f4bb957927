use std::cell::Cell;
use std::rc::Rc;

use cache_latest::traits::{Sequence, SizedSequence};

/// `0..n` mapped through `f`, counting every production step.
pub struct CountingMap<F> {
    pub n: u64,
    pub f: F,
    pub reads: Rc<Cell<usize>>,
}

impl<F: Clone> Clone for CountingMap<F> {
    fn clone(&self) -> Self {
        Self {
            n: self.n,
            f: self.f.clone(),
            reads: Rc::clone(&self.reads),
        }
    }
}

impl<F> CountingMap<F> {
    pub fn new(n: u64, f: F) -> Self {
        Self {
            n,
            f,
            reads: Rc::new(Cell::new(0)),
        }
    }

    /// Shared handle to the read counter, usable after the base is moved.
    pub fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.reads)
    }
}

impl<F, T> Sequence for CountingMap<F>
where
    F: FnMut(u64) -> T,
{
    type Item = T;
    type Cursor = u64;
    type End = u64;

    fn start(&mut self) -> u64 {
        0
    }

    fn end(&self) -> u64 {
        self.n
    }

    fn read(&mut self, cursor: &u64) -> T {
        self.reads.set(self.reads.get() + 1);
        (self.f)(*cursor)
    }

    fn step(&mut self, cursor: &mut u64) {
        *cursor += 1;
    }

    fn is_end(&self, cursor: &u64, end: &u64) -> bool {
        cursor == end
    }
}

impl<F, T> SizedSequence for CountingMap<F>
where
    F: FnMut(u64) -> T,
{
    fn len(&self) -> usize {
        self.n as usize
    }
}
