//! Trybuild fixture verifying the derive keeps generics and skips untagged
//! fields of arbitrary type.

use tagopt::{Registry, TagOpt};

#[derive(Default, TagOpt)]
struct Wrapper<T: Default> {
    #[tagopt("s:n;l:name")]
    name: String,
    inner: T,
}

#[derive(Default, TagOpt)]
struct Nothing {}

fn main() {
    let mut wrapper: Wrapper<std::collections::BTreeMap<u8, u8>> = Wrapper::default();
    let mut registry = Registry::new();
    let _ = wrapper.register(&mut registry);
    drop(registry);
    let _ = (&wrapper.name, &wrapper.inner);

    let mut nothing = Nothing::default();
    let _ = nothing.parse_args(["ignored"]);
}
