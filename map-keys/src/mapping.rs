//! The key mapper and its entrypoints.
//!
//! - [`map_keys`]: infallible transform
//! - [`try_map_keys`]: fallible transform, errors returned untouched
//! - [`MapKeys`]: method form of both, for every [`Enumerable`] type

use std::convert::Infallible;

use indexmap::IndexMap;

use crate::{key::ToKeyString, source::Enumerable};

/// Insertion-ordered result of a key mapping.
///
/// Values are references into the source, so the result is a shallow copy.
/// Call `.into_iter().map(|(k, v)| (k, v.clone())).collect()` when an owned
/// copy is needed.
pub type KeyMap<V> = IndexMap<String, V>;

// =============================================================================
// Entrypoints
// =============================================================================

/// Builds a new map keyed by `transform(key, value, source)` for each own
/// entry of `source`.
///
/// The transform runs once per entry, in enumeration order, and its result is
/// coerced through [`ToKeyString`]. When two entries map to the same key the
/// later one wins; the key keeps the position where it was first inserted.
/// An empty source yields an empty map without calling the transform.
pub fn map_keys<'s, S, F, K>(source: &'s S, mut transform: F) -> KeyMap<&'s S::Value>
where
    S: Enumerable + ?Sized,
    F: FnMut(&str, &S::Value, &S) -> K,
    K: ToKeyString,
{
    let mapped = try_map_keys(source, |key, value, source| {
        Ok::<_, Infallible>(transform(key, value, source))
    });
    match mapped {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// Fallible form of [`map_keys`].
///
/// The first error returned by `transform` aborts the mapping and is returned
/// as-is; the partially built map is dropped.
pub fn try_map_keys<'s, S, F, K, E>(
    source: &'s S,
    mut transform: F,
) -> Result<KeyMap<&'s S::Value>, E>
where
    S: Enumerable + ?Sized,
    F: FnMut(&str, &S::Value, &S) -> Result<K, E>,
    K: ToKeyString,
{
    let entries = source.own_entries();
    let mut result = KeyMap::with_capacity(entries.size_hint().0);
    for (key, value) in entries {
        let mapped = transform(&*key, value, source)?.to_key_string();
        // Last write wins: `insert` replaces the value and keeps the slot.
        result.insert(mapped, value);
    }
    Ok(result)
}

// =============================================================================
// MapKeys - method form
// =============================================================================

/// Method-call form of [`map_keys`] and [`try_map_keys`].
///
/// Blanket-implemented for every [`Enumerable`] type.
pub trait MapKeys: Enumerable {
    /// See [`map_keys`].
    #[must_use]
    fn map_keys<F, K>(&self, transform: F) -> KeyMap<&Self::Value>
    where
        F: FnMut(&str, &Self::Value, &Self) -> K,
        K: ToKeyString,
    {
        map_keys(self, transform)
    }

    /// See [`try_map_keys`].
    fn try_map_keys<F, K, E>(&self, transform: F) -> Result<KeyMap<&Self::Value>, E>
    where
        F: FnMut(&str, &Self::Value, &Self) -> Result<K, E>,
        K: ToKeyString,
    {
        try_map_keys(self, transform)
    }
}

impl<T> MapKeys for T where T: Enumerable + ?Sized {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{MapKeys, map_keys, try_map_keys};

    #[test]
    fn transform_sees_key_value_and_source() {
        let source = BTreeMap::from([("a", 1), ("b", 2)]);
        let mut calls = Vec::new();
        let _ = map_keys(&source, |key, value, whole| {
            assert!(std::ptr::eq(whole, &source));
            calls.push((key.to_owned(), *value));
            key.to_owned()
        });
        assert_eq!(calls, [("a".to_owned(), 1), ("b".to_owned(), 2)]);
    }

    #[test]
    fn collisions_keep_last_value_at_first_position() {
        let source = vec!["first", "second", "third"];
        let result = map_keys(&source, |key, _, _| if key == "1" { "one" } else { "same" });

        assert_eq!(result.len(), 2);
        assert_eq!(result.get_index(0), Some((&"same".to_owned(), &&"third")));
        assert_eq!(result.get_index(1), Some((&"one".to_owned(), &&"second")));
    }

    #[test]
    fn empty_source_never_calls_transform() {
        let source: BTreeMap<String, u8> = BTreeMap::new();
        let result = map_keys(&source, |_, _, _| -> String {
            panic!("transform must not run for an empty source")
        });
        assert!(result.is_empty());
    }

    #[test]
    fn transform_error_aborts_and_propagates() {
        let source = vec![1, 2, 3];
        let mut visited = 0;
        let result = try_map_keys(&source, |key, value, _| {
            visited += 1;
            if *value == 2 {
                Err(format!("rejected {key}"))
            } else {
                Ok(key.to_owned())
            }
        });
        assert_eq!(result, Err("rejected 1".to_owned()));
        assert_eq!(visited, 2);
    }

    #[test]
    fn method_form_matches_free_function() {
        let source = BTreeMap::from([("a", 1), ("b", 2)]);
        let via_method = source.map_keys(|key, value, _| format!("{key}{value}"));
        let via_function = map_keys(&source, |key, value, _| format!("{key}{value}"));
        assert_eq!(via_method, via_function);

        let fallible = source.try_map_keys(|key, _, _| Ok::<_, ()>(key.to_uppercase()));
        assert_eq!(fallible.unwrap().keys().collect::<Vec<_>>(), ["A", "B"]);
    }
}
