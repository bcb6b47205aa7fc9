use descriptor_macros::Introspect;
use infrastructure_common::{Introspect, Marked};

#[derive(Introspect)]
struct Holder<'a, T, const N: usize> {
    #[inject]
    inner: &'a T,
    values: [u8; N],
}

fn main() {
    let descriptor = Holder::<'static, String, 4>::describe();
    assert_eq!(descriptor.fields[0].name, "inner");
    assert!(descriptor.fields[0].is_injected());
    assert!(!descriptor.fields[1].is_injected());
}
