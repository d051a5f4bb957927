#![no_main]

use cache_latest::ds::NonPropagatingCache;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on NonPropagatingCache
//
// Mirrors every operation on an Option model and checks that copies and
// relocations never carry a value across.
fuzz_target!(|data: &[u8]| {
    let mut cache: NonPropagatingCache<u32> = NonPropagatingCache::new();
    let mut model: Option<u32> = None;

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = data[idx + 1] as u32;

        match op {
            0 => {
                assert_eq!(*cache.emplace(value), value);
                model = Some(value);
            },
            1 => {
                let got = *cache.get_or_emplace_with(|| value);
                let expected = *model.get_or_insert(value);
                assert_eq!(got, expected);
            },
            2 => {
                cache.reset();
                model = None;
            },
            3 => {
                assert_eq!(cache.take(), model.take());
            },
            4 => {
                let copy = cache.clone();
                assert!(!copy.has_value());
            },
            5 => {
                let moved = cache.relocate();
                assert!(!moved.has_value());
                model = None;
            },
            6 => {
                let mut other = NonPropagatingCache::new();
                other.emplace(value);
                cache.assign_from(&other);
                assert!(other.has_value());
                model = None;
            },
            7 => {
                let mut other = NonPropagatingCache::new();
                other.emplace(value);
                cache.assign_take(&mut other);
                assert!(!other.has_value());
                model = None;
            },
            _ => unreachable!(),
        }

        assert_eq!(cache.has_value(), model.is_some());
        assert_eq!(cache.get().copied(), model);

        idx += 2;
    }
});
