use map_keys::{Enumerable, MapKeys};

#[derive(Enumerable)]
struct Rgb(u8, u8, u8);

#[derive(Enumerable)]
#[enumerable(value = u8)]
struct Marker;

fn main() {
    let color = Rgb(255, 128, 0);
    assert_eq!(color.map_keys(|key, _, _| key.to_owned()).len(), 3);
    assert!(Marker.map_keys(|key, _, _| key.to_owned()).is_empty());
}
