//! Key transformation for enumerable key-value sources.
//!
//! This crate builds a new map whose keys are produced by a caller-supplied
//! transform, while the values are shared with the source:
//!
//! - **Sources**: anything implementing [`Enumerable`] (maps, sequences,
//!   smart pointers to those, and structs deriving `Enumerable`).
//! - **Keys**: whatever the transform returns, coerced through [`ToKeyString`].
//! - **Result**: a fresh, insertion-ordered [`KeyMap`] of references into the
//!   source. Colliding keys keep the last value enumerated.
//!
//! What this crate does:
//! - enumerates a source's own entries exactly once, in order
//! - coerces transform results into string keys with documented rules
//! - validates loosely-typed operands behind the `json` feature
//!
//! What it does not do:
//! - clone or deep-copy values
//! - recover from transform failures (they are returned untouched)
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use map_keys::map_keys;
//!
//! let source = BTreeMap::from([("a", 1), ("b", 2)]);
//! let mapped = map_keys(&source, |key, value, _| format!("{key}{value}"));
//!
//! assert_eq!(mapped.keys().collect::<Vec<_>>(), ["a1", "b2"]);
//! assert!(std::ptr::eq(mapped["a1"], &source["a"]));
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use map_keys_derive::Enumerable;

#[allow(unused_extern_crates)]
extern crate self as map_keys;

// Module declarations
#[cfg(feature = "json")]
mod dynamic;
mod error;
mod key;
mod mapping;
mod source;

// Re-exports from dynamic module
#[cfg(feature = "json")]
pub use dynamic::{DynTransform, Operand, map_keys_dynamic};
pub use error::MapKeysError;
pub use key::{OBJECT_KEY, ToKeyString, UNDEFINED_KEY};
pub use mapping::{KeyMap, MapKeys, map_keys, try_map_keys};
pub use source::Enumerable;
