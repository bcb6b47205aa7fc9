use descriptor_macros::Introspect;
use infrastructure_common::{Introspect, Marked};
use std::collections::HashSet;

#[derive(Introspect)]
#[bean(provider(method = "create", static))]
struct Tuple(#[inject] u32, HashSet<String>);

fn main() {
    let descriptor = Tuple::describe();
    assert_eq!(descriptor.fields[0].name, "0");
    assert!(descriptor.fields[0].is_injected());
    assert_eq!(descriptor.fields[1].element_type(), Some("String"));
    assert!(descriptor.method("create").unwrap().is_static);
}
