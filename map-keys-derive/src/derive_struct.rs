//! Struct-specific `Enumerable` derivation.
//!
//! This module turns each enumerable field into one `(key, &value)` entry and
//! settles the shared value type.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, quote_spanned};
use syn::{DataStruct, Fields, Index, Member, Result, ext::IdentExt, spanned::Spanned};

use crate::{container::ContainerOptions, field::parse_field_options, types::is_phantom_data};

pub(crate) struct DeriveOutput {
    pub(crate) value_ty: TokenStream,
    pub(crate) entries: Vec<TokenStream>,
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: DataStruct,
    options: ContainerOptions,
) -> Result<DeriveOutput> {
    let mut value_ty = options.value_ty.map(|ty| ty.into_token_stream());
    let mut entries = Vec::new();

    let fields = match data.fields {
        Fields::Named(fields) => fields.named.into_iter().collect::<Vec<_>>(),
        Fields::Unnamed(fields) => fields.unnamed.into_iter().collect::<Vec<_>>(),
        Fields::Unit => Vec::new(),
    };

    for (index, field) in fields.into_iter().enumerate() {
        let field_options = parse_field_options(&field.attrs)?;
        if field_options.skip || is_phantom_data(&field.ty) {
            continue;
        }

        let span = field.span();
        let (member, default_key) = match field.ident {
            Some(ident) => {
                let key = ident.unraw().to_string();
                (Member::Named(ident), key)
            }
            None => (
                Member::Unnamed(Index {
                    index: u32::try_from(index).map_err(|_| {
                        syn::Error::new(span, "too many fields to enumerate")
                    })?,
                    span,
                }),
                index.to_string(),
            ),
        };
        let key = field_options
            .rename
            .map_or(default_key, |rename| rename.value());

        if value_ty.is_none() {
            value_ty = Some(field.ty.to_token_stream());
        }

        entries.push(quote_spanned! { span =>
            (::std::borrow::Cow::Borrowed(#key), &self.#member)
        });
    }

    let value_ty = value_ty.ok_or_else(|| {
        syn::Error::new(
            Span::call_site(),
            format!(
                "cannot infer the value type of `{name}` without enumerable fields; \
                 add #[enumerable(value = Type)]"
            ),
        )
    })?;

    Ok(DeriveOutput { value_ty, entries })
}
