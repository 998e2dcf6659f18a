//! Procedural macros for `tagopt`.
//!
//! `#[derive(TagOpt)]` implements `tagopt::TagOpt` for a struct with named
//! fields. Every field carrying a `#[tagopt("...")]` tag expression is
//! registered with that expression; untagged fields are left alone. The tag
//! text is compiled when the struct registers, so tag mistakes surface as
//! `tagopt::TagOptError` values rather than compile errors.
//!
//! A struct-level `#[tagopt(crate = "alias")]` changes the path used for the
//! `tagopt` crate in generated code, for callers that rename the dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `tagopt::TagOpt`.
#[proc_macro_derive(TagOpt, attributes(tagopt))]
pub fn derive_tagopt(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
