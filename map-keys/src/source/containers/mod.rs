//! `Enumerable` implementations for standard and ecosystem containers.
//!
//! ## Sequences Enumerate Index Keys
//!
//! Sequences expose their positions as keys (`"0"`, `"1"`, ...), so arrays and
//! maps are handled uniformly by the mapper.
//!
//! ## Map Keys Are Coerced
//!
//! Map keys go through `ToKeyString` before reaching the transform. Two
//! distinct keys that coerce to the same text are still enumerated as two
//! entries; deduplication only happens on the mapped side.

mod maps;
mod pointers;
mod sequences;
