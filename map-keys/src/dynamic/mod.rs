//! Loosely-typed key mapping over JSON values.
//!
//! This is the entrypoint for callers that hold arguments of unknown kind,
//! such as values decoded from a script or a config document. Both operands
//! are checked before anything is enumerated:
//!
//! | Operand    | Accepted                         | Rejected with                |
//! |------------|----------------------------------|------------------------------|
//! | source     | JSON object, JSON array          | `InvalidSourceKind`          |
//! | transform  | [`Operand::Function`]            | `InvalidTransformKind`       |
//!
//! Arrays enumerate their indices as keys, objects their own keys in
//! insertion order. Objects do not reorder integer-like keys ahead of the
//! others the way host property order does, so `{"x": 1, "0": 2}` visits
//! `"x"` first and a colliding transform keeps the value of `"0"`.

use std::fmt;

use serde_json::{Map, Value};

use crate::{
    error::MapKeysError,
    key::{ToKeyString, UNDEFINED_KEY},
    mapping::{KeyMap, try_map_keys},
};

/// Signature of a dynamic transform: `(key, value, source) -> new key`.
///
/// The returned value is coerced with [`ToKeyString`], so returning an object
/// produces the key `"[object Object]"`.
pub type DynTransform<'f, E> = dyn Fn(&str, &Value, &Value) -> Result<Value, E> + 'f;

/// An argument of unknown kind.
///
/// `E` is the error type the transform may fail with; it defaults to
/// [`MapKeysError`] for transforms that never fail.
pub enum Operand<'a, E = MapKeysError> {
    /// No value at all.
    Undefined,
    /// Any JSON value, including `null`.
    Value(&'a Value),
    /// An invocable transform.
    Function(&'a DynTransform<'a, E>),
}

impl<'a, E> Operand<'a, E> {
    /// Wraps a closure as a function operand.
    pub fn function(transform: &'a DynTransform<'a, E>) -> Self {
        Self::Function(transform)
    }

    fn as_container(&self) -> Option<(&'a Value, Container<'a>)> {
        let Self::Value(whole) = *self else {
            return None;
        };
        match whole {
            Value::Object(map) => Some((whole, Container::Object(map))),
            Value::Array(items) => Some((whole, Container::Array(items))),
            _ => None,
        }
    }
}

impl<E> Clone for Operand<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Operand<'_, E> {}

impl<'a, E> From<&'a Value> for Operand<'a, E> {
    fn from(value: &'a Value) -> Self {
        Self::Value(value)
    }
}

impl<'a, E> From<Option<&'a Value>> for Operand<'a, E> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Undefined, Self::Value)
    }
}

/// Renders the operand the way it appears in error messages.
impl<E> fmt::Display for Operand<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str(UNDEFINED_KEY),
            Self::Value(value) => f.write_str(&value.to_key_string()),
            Self::Function(_) => f.write_str("[function]"),
        }
    }
}

impl<E> fmt::Debug for Operand<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

#[derive(Clone, Copy)]
enum Container<'a> {
    Object(&'a Map<String, Value>),
    Array(&'a [Value]),
}

// =============================================================================
// Entrypoint
// =============================================================================

/// Maps the keys of a dynamic `source` through a dynamic `transform`.
///
/// Validation failures are converted into `E` through
/// `From<MapKeysError>`; transform failures are returned exactly as the
/// transform produced them.
///
/// ```
/// use map_keys::{MapKeysError, Operand, map_keys_dynamic};
/// use map_keys::ToKeyString;
/// use serde_json::{Value, json};
///
/// let source = json!({"a": 1, "b": 2});
/// let transform = |key: &str, value: &Value, _: &Value| {
///     Ok(Value::String(format!("{key}{}", value.to_key_string())))
/// };
///
/// let mapped = map_keys_dynamic::<MapKeysError>((&source).into(), Operand::function(&transform))?;
/// assert_eq!(serde_json::to_value(&mapped).unwrap(), json!({"a1": 1, "b2": 2}));
/// # Ok::<(), MapKeysError>(())
/// ```
pub fn map_keys_dynamic<'a, E>(
    source: Operand<'a, E>,
    transform: Operand<'a, E>,
) -> Result<KeyMap<&'a Value>, E>
where
    E: From<MapKeysError>,
{
    let Some((whole, container)) = source.as_container() else {
        #[cfg(feature = "tracing")]
        tracing::debug!(operand = %source, "map_keys rejected source operand");
        return Err(MapKeysError::InvalidSourceKind {
            value: source.to_string(),
        }
        .into());
    };
    let Operand::Function(transform) = transform else {
        #[cfg(feature = "tracing")]
        tracing::debug!(operand = %transform, "map_keys rejected transform operand");
        return Err(MapKeysError::InvalidTransformKind {
            value: transform.to_string(),
        }
        .into());
    };

    let result = match container {
        Container::Object(map) => try_map_keys(map, |key, value, _| transform(key, value, whole)),
        Container::Array(items) => {
            try_map_keys(items, |key, value, _| transform(key, value, whole))
        }
    }?;

    #[cfg(feature = "tracing")]
    tracing::trace!(entries = result.len(), "map_keys mapped dynamic source");
    Ok(result)
}
