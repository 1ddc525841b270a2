//! Enumeration of map containers (keys coerced, values borrowed).

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use indexmap::IndexMap;

use crate::{key::ToKeyString, source::Enumerable};

fn coerce_key<K: ToKeyString>(key: &K) -> Cow<'_, str> {
    Cow::Owned(key.to_key_string())
}

// =============================================================================
// Std maps
// =============================================================================

impl<K, V> Enumerable for BTreeMap<K, V>
where
    K: ToKeyString,
{
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &V)> {
        self.iter().map(|(k, v)| (coerce_key(k), v))
    }
}

impl<K, V, S> Enumerable for HashMap<K, V, S>
where
    K: ToKeyString,
{
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &V)> {
        self.iter().map(|(k, v)| (coerce_key(k), v))
    }
}

// =============================================================================
// Ordered maps
// =============================================================================

impl<K, V, S> Enumerable for IndexMap<K, V, S>
where
    K: ToKeyString,
{
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &V)> {
        self.iter().map(|(k, v)| (coerce_key(k), v))
    }
}

#[cfg(feature = "json")]
impl Enumerable for serde_json::Map<String, serde_json::Value> {
    type Value = serde_json::Value;

    fn own_entries(&self) -> impl Iterator<Item = (Cow<'_, str>, &serde_json::Value)> {
        // Keys are already text; borrow them instead of coercing.
        self.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v))
    }
}
