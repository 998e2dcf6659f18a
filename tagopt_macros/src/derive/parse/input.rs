//! Input parsing for the `TagOpt` derive macro.
//!
//! This module gathers the struct identifier, generics, and tagged fields in
//! one pass so macro expansion can fail fast with useful errors.

use syn::{Data, DeriveInput, Fields, LitStr};

use super::{StructAttrs, parse_field_tag, parse_struct_attrs};

/// A named field carrying a tag expression.
pub(crate) struct TaggedField {
    pub ident: syn::Ident,
    pub tag: LitStr,
}

/// Everything the generator needs from the user's struct.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub struct_attrs: StructAttrs,
    pub fields: Vec<TaggedField>,
}

/// Gathers information from the user-provided struct.
///
/// Untagged fields are dropped here; only tagged ones reach generation.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "TagOpt requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "TagOpt can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let Some(tag) = parse_field_tag(field)? else {
            continue;
        };
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "TagOpt requires named fields"))?;
        fields.push(TaggedField { ident, tag });
    }
    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        struct_attrs,
        fields,
    })
}
