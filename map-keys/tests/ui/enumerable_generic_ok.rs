use std::{fmt::Display, marker::PhantomData};

use map_keys::{Enumerable, map_keys};

#[derive(Enumerable)]
struct Pair<'a, T, U>
where
    T: Display,
{
    first: &'a T,
    second: &'a T,
    _unit: PhantomData<U>,
}

fn main() {
    let (one, two) = (1, 2);
    let pair: Pair<'_, i32, String> = Pair {
        first: &one,
        second: &two,
        _unit: PhantomData,
    };
    let mapped = map_keys(&pair, |_, value, _| value.to_string());
    assert_eq!(mapped.keys().collect::<Vec<_>>(), ["1", "2"]);
}
