//! Parsing of container-level `#[enumerable(...)]` attributes.

use syn::{Attribute, Result};

/// Options placed on the struct itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Explicit value type from `#[enumerable(value = Type)]`.
    pub(crate) value_ty: Option<syn::Type>,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("enumerable") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("value") {
                if options.value_ty.is_some() {
                    return Err(meta.error("duplicate `value` in #[enumerable(...)]"));
                }
                options.value_ty = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error(
                    "unsupported container attribute: expected #[enumerable(value = Type)]",
                ))
            }
        })?;
    }
    Ok(options)
}
