//! The enumeration capability a source must provide.
//!
//! A source is anything that can list its own key-value entries. There is no
//! notion of inherited entries: every implementation here is a flat container,
//! and derived structs list exactly the fields that are not marked
//! `#[enumerable(skip)]`.

mod containers;

use std::borrow::Cow;

/// A source of own, enumerable key-value entries.
///
/// Entries are yielded in the source's enumeration order, which is also the
/// order in which the mapper calls the transform:
///
/// | Source                                   | Keys                 | Order            |
/// |------------------------------------------|----------------------|------------------|
/// | `Vec<V>`, `VecDeque<V>`, `[V]`, `[V; N]` | indices (`"0"`, ...) | ascending index  |
/// | `BTreeMap<K, V>`                         | `K` coerced to text  | sorted by `K`    |
/// | `IndexMap<K, V, S>`                      | `K` coerced to text  | insertion order  |
/// | `HashMap<K, V, S>`                       | `K` coerced to text  | the map's own (unspecified) order |
/// | `serde_json::Map` (feature `json`)       | the map's keys       | insertion order  |
/// | `#[derive(Enumerable)]` structs          | field names          | declaration order |
///
/// Implement it by hand for other containers:
///
/// ```
/// use std::borrow::Cow;
///
/// use map_keys::{Enumerable, map_keys};
///
/// struct Pair {
///     left: u32,
///     right: u32,
/// }
///
/// impl Enumerable for Pair {
///     type Value = u32;
///
///     fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &u32)> {
///         [
///             (Cow::Borrowed("left"), &self.left),
///             (Cow::Borrowed("right"), &self.right),
///         ]
///         .into_iter()
///     }
/// }
///
/// let pair = Pair { left: 1, right: 2 };
/// let mapped = map_keys(&pair, |key, _, _| key.to_uppercase());
/// assert_eq!(mapped.keys().collect::<Vec<_>>(), ["LEFT", "RIGHT"]);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Enumerable`",
    label = "this type cannot be enumerated as key-value entries",
    note = "use `#[derive(Enumerable)]` on the type definition",
    note = "or pass a map or sequence that already implements it"
)]
pub trait Enumerable {
    /// Type of the values shared with the mapped result.
    type Value;

    /// Returns the source's own entries in enumeration order.
    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &Self::Value)>;
}
