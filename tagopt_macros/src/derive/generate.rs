//! Code generation for the `TagOpt` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;
use syn::ext::IdentExt;

use super::parse::{ParsedInput, TaggedField};

fn register_field(field: &TaggedField) -> TokenStream {
    let TaggedField { ident, tag } = field;
    let name = LitStr::new(&ident.unraw().to_string(), ident.span());
    quote! {
        registry.register_tagged(#name, &mut self.#ident, #tag)?;
    }
}

/// Generates `impl TagOpt for <struct>`.
///
/// `krate` is the resolved path to the `tagopt` crate.
pub(crate) fn tagopt_impl(parsed: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();
    let registrations = parsed.fields.iter().map(register_field);
    let unused = parsed.fields.is_empty().then(|| quote! { let _ = registry; });
    quote! {
        impl #impl_generics #krate::TagOpt for #ident #ty_generics #where_clause {
            fn register<'__tagopt>(
                &'__tagopt mut self,
                registry: &mut #krate::Registry<'__tagopt>,
            ) -> #krate::TagOptResult<()> {
                #unused
                #( #registrations )*
                ::core::result::Result::Ok(())
            }
        }
    }
}
