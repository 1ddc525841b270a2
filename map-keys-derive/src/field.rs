//! Parsing of field-level `#[enumerable(...)]` attributes.
//!
//! | Attribute                         | Effect                              |
//! |-----------------------------------|-------------------------------------|
//! | None                              | Enumerated under its name or index  |
//! | `#[enumerable(skip)]`             | Not enumerated                      |
//! | `#[enumerable(rename = "key")]`   | Enumerated under `key`              |

use syn::{Attribute, LitStr, Result};

#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) skip: bool,
    pub(crate) rename: Option<LitStr>,
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("enumerable") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if options.skip {
                    return Err(meta.error("duplicate `skip` in #[enumerable(...)]"));
                }
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                if options.rename.is_some() {
                    return Err(meta.error("duplicate `rename` in #[enumerable(...)]"));
                }
                options.rename = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported field attribute: expected #[enumerable(skip)] \
                     or #[enumerable(rename = \"key\")]",
                ))
            }
        })?;
    }

    if options.skip {
        if let Some(rename) = &options.rename {
            return Err(syn::Error::new(
                rename.span(),
                "`rename` has no effect on a skipped field",
            ));
        }
    }
    Ok(options)
}
