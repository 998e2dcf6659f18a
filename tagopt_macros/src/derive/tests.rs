//! Token-level tests for the generated implementation.

use anyhow::{Result, ensure};
use syn::{DeriveInput, parse_quote};

use super::expand;

fn squash(tokens: &proc_macro2::TokenStream) -> String {
    tokens.to_string().split_whitespace().collect()
}

#[test]
fn registers_each_tagged_field() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Args {
            #[tagopt("short:c;long:conf")]
            conf: String,
            skipped: u8,
            #[tagopt("l:type")]
            r#type: String,
        }
    };
    let generated = squash(&expand(&input)?);
    ensure!(generated.contains("impl::tagopt::TagOptforArgs"), "{generated}");
    ensure!(
        generated.contains(r#"registry.register_tagged("conf",&mutself.conf,"short:c;long:conf")?;"#),
        "{generated}"
    );
    ensure!(
        generated.contains(r#"registry.register_tagged("type",&mutself.r#type,"l:type")?;"#),
        "{generated}"
    );
    ensure!(!generated.contains("skipped"), "{generated}");
    ensure!(!generated.contains("let_=registry;"), "{generated}");
    Ok(())
}

#[test]
fn uses_crate_override() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[tagopt(crate = "opts")]
        struct Args {
            #[tagopt("s:v")]
            verbose: bool,
        }
    };
    let generated = squash(&expand(&input)?);
    ensure!(generated.contains("implopts::TagOptforArgs"), "{generated}");
    ensure!(generated.contains("registry:&mutopts::Registry<'__tagopt>"), "{generated}");
    Ok(())
}

#[test]
fn keeps_generics() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Args<T: Default> where T: Clone {
            #[tagopt("l:name")]
            name: String,
            extra: T,
        }
    };
    let generated = squash(&expand(&input)?);
    ensure!(
        generated.contains("impl<T:Default>::tagopt::TagOptforArgs<T>whereT:Clone"),
        "{generated}"
    );
    Ok(())
}

#[test]
fn untagged_struct_still_implements_the_trait() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Empty {
            a: u8,
        }
    };
    let generated = squash(&expand(&input)?);
    ensure!(generated.contains("let_=registry;"), "{generated}");
    ensure!(generated.contains("::core::result::Result::Ok(())"), "{generated}");
    Ok(())
}
