//! Test functions generated by the build script from `units.txt`.
//!
//! Nothing here uses the `unit_test!` macro: the build script names every function with
//! `unit_test_names::NameGenerator` and writes them out directly, which is the route to take when the functions come
//! from data rather than from hand-written code.  libtest collects them through `#[test]`.

/// One generated test function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub name: &'static str,
    pub label: &'static str,
    pub id: u64,

    /// Line in `units.txt`.
    pub line: u32,
}

include!(concat!(env!("OUT_DIR"), "/units.rs"));
