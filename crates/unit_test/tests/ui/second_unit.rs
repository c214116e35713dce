use unit_test::unit_test;

unit_test! { foo -> &'static str { "second" } }

fn main() {
    // Same label, same line, separate crate: the same name as in first_unit.rs, and no conflict.
    assert_eq!(unit_test_foo_000000000000000000003(), "second");
}
