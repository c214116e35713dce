use unit_test::unit_test;

unit_test! { foo -> &'static str { "first" } }

fn main() {
    // A fresh crate starts counting at 0, and the label is on line 3.
    assert_eq!(unit_test_foo_000000000000000000003(), "first");
}
