//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[tagopt(crate = "...")]` attribute value into the
//! tokens generated code uses to reach the `tagopt` crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::tagopt` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::tagopt }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.

    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: tagopt")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("deps::tagopt"), "deps :: tagopt")]
    fn resolve_produces_expected_tokens(
        #[case] input: Option<&str>,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = input.map(syn::parse_str::<syn::Path>).transpose()?;
        let tokens = resolve(parsed.as_ref()).to_string();
        ensure!(tokens == expected, "got {tokens}");
        Ok(())
    }
}
