//! Derive macro for `map-keys`.
//!
//! This crate generates the `Enumerable` implementation behind
//! `#[derive(Enumerable)]`. It:
//! - reads `#[enumerable(...)]` container and field attributes
//! - lists the struct's enumerable fields as key-value entries in declaration order
//!
//! It does **not** perform any key mapping. That lives in the main `map-keys`
//! crate and runs against the generated entries.

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
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input};

mod container;
mod derive_struct;
mod field;
mod types;
use container::parse_container_options;
use derive_struct::derive_struct;

/// Derives `map_keys::Enumerable` for structs.
///
/// # Container Attributes
///
/// - `#[enumerable(value = Type)]` - The value type shared by every enumerable field. Without it,
///   the type of the first enumerable field is used. Required when no field is enumerable.
///
/// # Field Attributes
///
/// - **No annotation**: The field is enumerated. Named fields use their name as the key (raw
///   identifiers lose their `r#` prefix); tuple fields use their index (`"0"`, `"1"`, ...).
///
/// - `#[enumerable(skip)]`: The field is not enumerated, and the mapper never sees it.
///
/// - `#[enumerable(rename = "key")]`: The field is enumerated under `key` instead of its name.
///
/// `PhantomData<T>` fields carry no value and are always skipped.
///
/// # Example
///
/// ```ignore
/// #[derive(Enumerable)]
/// struct Limits {
///     soft: u64,
///     #[enumerable(rename = "hard-limit")]
///     hard: u64,
///     #[enumerable(skip)]
///     cached_total: u64,
/// }
/// ```
///
/// Enums and unions are rejected at compile time.
#[proc_macro_derive(Enumerable, attributes(enumerable))]
pub fn derive_enumerable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let options = parse_container_options(&attrs)?;
    let data = match data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span,
                "`Enumerable` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span,
                "`Enumerable` can only be derived for structs",
            ));
        }
    };

    let output = derive_struct(&ident, data, options)?;
    let value_ty = output.value_ty;
    let entries = output.entries;
    let count = entries.len();

    let crate_root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::Enumerable for #ident #ty_generics #where_clause {
            type Value = #value_ty;

            fn own_entries(
                &self,
            ) -> impl ::core::iter::Iterator<
                Item = (::std::borrow::Cow<'_, str>, &Self::Value),
            > {
                let entries: [(::std::borrow::Cow<'_, str>, &Self::Value); #count] = [
                    #(#entries),*
                ];
                entries.into_iter()
            }
        }
    })
}

/// Returns the token stream to reference the map-keys crate root.
///
/// Handles crate renaming (e.g., `keys = { package = "map-keys", ... }`)
/// and internal usage (when the derive is used inside map-keys itself).
fn crate_root() -> TokenStream {
    match crate_name("map-keys") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::map_keys },
    }
}
