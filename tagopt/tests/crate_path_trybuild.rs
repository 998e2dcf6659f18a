//! trybuild coverage for `#[tagopt(crate = "...")]` support.
//!
//! Ensures that generated code compiles when the crate path is overridden
//! and when a struct has no tagged fields at all.

#[test]
fn derive_fixtures_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_path_alias.rs");
    t.pass("tests/trybuild/generic_struct.rs");
}
