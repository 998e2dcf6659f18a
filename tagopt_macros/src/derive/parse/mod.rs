//! Attribute parsing for the `TagOpt` derive macro.

mod input;
mod literals;

use syn::{Attribute, LitStr};

use literals::lit_str;

pub(crate) use input::{ParsedInput, TaggedField, parse_input};

/// Struct-level `#[tagopt(...)]` settings.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[tagopt(crate = "my_alias")]`, generated code uses
    /// `my_alias::` instead of `::tagopt::`.
    pub crate_path: Option<syn::Path>,
}

fn tagopt_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("tagopt"))
}

/// Extracts struct-level settings. Unknown keys are rejected.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for attr in tagopt_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let s = lit_str(&meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            } else {
                Err(meta.error("unsupported tagopt struct attribute; expected `crate = \"...\"`"))
            }
        })?;
    }
    Ok(out)
}

/// Extracts the tag expression of a field, if any.
///
/// The attribute takes a single string literal: `#[tagopt("short:c")]`.
/// A field may carry at most one.
pub(crate) fn parse_field_tag(field: &syn::Field) -> syn::Result<Option<LitStr>> {
    let mut tag: Option<LitStr> = None;
    for attr in tagopt_attrs(&field.attrs) {
        if tag.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate tagopt attribute"));
        }
        tag = Some(attr.parse_args::<LitStr>()?);
    }
    Ok(tag)
}
