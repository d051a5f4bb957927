#![no_main]

use std::cell::Cell;

use cache_latest::prelude::*;
use libfuzzer_sys::fuzz_target;

/// Base that counts production steps per index.
struct Tracked<'a> {
    len: usize,
    reads: &'a [Cell<u32>],
}

impl Sequence for Tracked<'_> {
    type Item = usize;
    type Cursor = usize;
    type End = usize;

    fn start(&mut self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.len
    }

    fn read(&mut self, cursor: &usize) -> usize {
        let slot = &self.reads[*cursor];
        slot.set(slot.get() + 1);
        cursor * 3
    }

    fn step(&mut self, cursor: &mut usize) {
        *cursor += 1;
    }

    fn is_end(&self, cursor: &usize, end: &usize) -> bool {
        cursor == end
    }
}

// Fuzz arbitrary get/advance/take sequences on a cached view
//
// Each index must be produced at most once, and every dereference and the
// final `take` must agree with the base.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let len = (data[0] as usize % 32) + 1;
    let reads: Vec<Cell<u32>> = (0..len).map(|_| Cell::new(0)).collect();
    let mut view = CacheLatest::new(Tracked { len, reads: &reads });
    let end = view.end();
    let mut pos = view.begin();
    let mut index = 0;

    for &byte in &data[1..] {
        if pos == end {
            break;
        }
        match byte % 3 {
            0 => {
                assert_eq!(*pos.get(), index * 3);
                assert_eq!(reads[index].get(), 1);
            },
            1 => {
                pos.advance();
                index += 1;
            },
            2 => {
                assert_eq!(pos.take(), index * 3);
                assert_eq!(reads[index].get(), 1);
                break;
            },
            _ => unreachable!(),
        }
    }
});
