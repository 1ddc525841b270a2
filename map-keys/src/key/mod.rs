//! Coercion of transform results into map keys.
//!
//! Every transform result goes through [`ToKeyString`] before it is used as a
//! key. The rules follow default string conversion of dynamic values:
//!
//! - text is used as-is
//! - numbers use shortest round-trip formatting (see [`number`])
//! - `()` and `None` become `"undefined"`
//! - sequences join their element keys with `","`, absent elements
//!   contributing an empty segment (`[None, Some(1)]` becomes `",1"`)
//! - maps become `"[object Object]"`, whatever their contents
//!
//! Map keys coerced this way can collide (two distinct maps both become
//! `"[object Object]"`). Collisions resolve as last-write-wins in the mapper.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap, VecDeque},
    rc::Rc,
    sync::Arc,
};

use indexmap::IndexMap;

#[cfg(feature = "json")]
mod json;
mod number;

pub(crate) use number::{format_f32, format_f64};

/// Key produced for any map-like value.
pub const OBJECT_KEY: &str = "[object Object]";

/// Key produced for an absent value (`()` or `None`).
pub const UNDEFINED_KEY: &str = "undefined";

/// Converts a transform result into the string used as a map key.
///
/// Implement this for your own key types when the transform returns them
/// directly:
///
/// ```
/// use map_keys::ToKeyString;
///
/// struct Slot(u8);
///
/// impl ToKeyString for Slot {
///     fn to_key_string(&self) -> String {
///         format!("slot-{}", self.0)
///     }
/// }
///
/// assert_eq!(Slot(3).to_key_string(), "slot-3");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a map key",
    label = "the transform returns a value with no key coercion",
    note = "implement `ToKeyString` for `{Self}`, or return a `String` from the transform"
)]
pub trait ToKeyString {
    /// Returns the key form of `self`.
    #[must_use]
    fn to_key_string(&self) -> String;

    /// Returns the form of `self` used as one segment of a joined sequence.
    ///
    /// Absent values override this to return an empty segment.
    #[must_use]
    fn to_element_key_string(&self) -> String {
        self.to_key_string()
    }
}

// =============================================================================
// Text
// =============================================================================

impl ToKeyString for str {
    fn to_key_string(&self) -> String {
        self.to_owned()
    }
}

impl ToKeyString for String {
    fn to_key_string(&self) -> String {
        self.clone()
    }
}

impl ToKeyString for Cow<'_, str> {
    fn to_key_string(&self) -> String {
        self.as_ref().to_owned()
    }
}

impl ToKeyString for char {
    fn to_key_string(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Scalars
// =============================================================================

impl ToKeyString for bool {
    fn to_key_string(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_to_key_string_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToKeyString for $ty {
                fn to_key_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_to_key_string_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl ToKeyString for f32 {
    fn to_key_string(&self) -> String {
        format_f32(*self)
    }
}

impl ToKeyString for f64 {
    fn to_key_string(&self) -> String {
        format_f64(*self)
    }
}

impl ToKeyString for () {
    fn to_key_string(&self) -> String {
        UNDEFINED_KEY.to_owned()
    }

    fn to_element_key_string(&self) -> String {
        String::new()
    }
}

impl<T: ToKeyString> ToKeyString for Option<T> {
    fn to_key_string(&self) -> String {
        match self {
            Some(value) => value.to_key_string(),
            None => UNDEFINED_KEY.to_owned(),
        }
    }

    fn to_element_key_string(&self) -> String {
        self.as_ref()
            .map_or_else(String::new, ToKeyString::to_element_key_string)
    }
}

// =============================================================================
// Sequences (element keys joined by ",")
// =============================================================================

fn join_keys<'a, T, I>(items: I) -> String
where
    T: ToKeyString + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(ToKeyString::to_element_key_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl<T: ToKeyString> ToKeyString for [T] {
    fn to_key_string(&self) -> String {
        join_keys(self)
    }
}

impl<T: ToKeyString, const N: usize> ToKeyString for [T; N] {
    fn to_key_string(&self) -> String {
        join_keys(self)
    }
}

impl<T: ToKeyString> ToKeyString for Vec<T> {
    fn to_key_string(&self) -> String {
        join_keys(self)
    }
}

impl<T: ToKeyString> ToKeyString for VecDeque<T> {
    fn to_key_string(&self) -> String {
        join_keys(self)
    }
}

// =============================================================================
// Maps (always the default object key)
// =============================================================================

impl<K, V> ToKeyString for BTreeMap<K, V> {
    fn to_key_string(&self) -> String {
        OBJECT_KEY.to_owned()
    }
}

impl<K, V, S> ToKeyString for HashMap<K, V, S> {
    fn to_key_string(&self) -> String {
        OBJECT_KEY.to_owned()
    }
}

impl<K, V, S> ToKeyString for IndexMap<K, V, S> {
    fn to_key_string(&self) -> String {
        OBJECT_KEY.to_owned()
    }
}

// =============================================================================
// Pointers
// =============================================================================

impl<T: ToKeyString + ?Sized> ToKeyString for &T {
    fn to_key_string(&self) -> String {
        (**self).to_key_string()
    }

    fn to_element_key_string(&self) -> String {
        (**self).to_element_key_string()
    }
}

impl<T: ToKeyString + ?Sized> ToKeyString for Box<T> {
    fn to_key_string(&self) -> String {
        (**self).to_key_string()
    }

    fn to_element_key_string(&self) -> String {
        (**self).to_element_key_string()
    }
}

impl<T: ToKeyString + ?Sized> ToKeyString for Rc<T> {
    fn to_key_string(&self) -> String {
        (**self).to_key_string()
    }

    fn to_element_key_string(&self) -> String {
        (**self).to_element_key_string()
    }
}

impl<T: ToKeyString + ?Sized> ToKeyString for Arc<T> {
    fn to_key_string(&self) -> String {
        (**self).to_key_string()
    }

    fn to_element_key_string(&self) -> String {
        (**self).to_element_key_string()
    }
}

// =============================================================================
// Tests
// =============================================================================
