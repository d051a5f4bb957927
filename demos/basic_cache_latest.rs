use cache_latest::prelude::*;

fn main() {
    // Lines parsed lazily from a stream; each is parsed once no matter how
    // many times the current position is inspected.
    let input = ["alpha=1", "beta=22", "gamma=333"];
    let parsed = Stream::new(input.iter().map(|line| {
        println!("parsing {line}");
        let (k, v) = line.split_once('=').unwrap_or((*line, "0"));
        (k.to_string(), v.parse::<u32>().unwrap_or(0))
    }));

    let mut view = parsed.cache_latest();
    let end = view.end();
    let mut pos = view.begin();
    while pos != end {
        let (key, value) = pos.get().clone();
        let width = pos.get().1.to_string().len();
        println!("{key} -> {value} ({width} digits)");
        pos.advance();
    }
}
