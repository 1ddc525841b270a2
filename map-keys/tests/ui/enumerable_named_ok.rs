use map_keys::{Enumerable, map_keys};

#[derive(Enumerable)]
struct Limits {
    soft: u64,
    #[enumerable(rename = "hard-limit")]
    hard: u64,
    #[enumerable(skip)]
    cached: bool,
}

fn main() {
    let limits = Limits {
        soft: 1,
        hard: 2,
        cached: false,
    };
    let mapped = map_keys(&limits, |key, _, _| key.to_owned());
    assert_eq!(mapped.len(), 2);
    assert!(!limits.cached);
}
