//! trybuild compile-time tests for descriptor_macros

#[test]
fn trybuild_descriptor_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/introspect_ok.rs");
    t.pass("tests/trybuild/introspect_generic_ok.rs");
}
