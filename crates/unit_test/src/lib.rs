//! Declare uniquely named zero-argument functions without inventing the names.
//!
//! ```
//! use unit_test::unit_test;
//!
//! unit_test! {
//!     #[test]
//!     parsing {
//!         assert_eq!("5".parse::<u32>(), Ok(5));
//!     }
//! }
//!
//! unit_test! {
//!     #[test]
//!     parsing -> Result<(), std::num::ParseIntError> {
//!         assert_eq!("6".parse::<u32>()?, 6);
//!         Ok(())
//!     }
//! }
//! # fn main() {}
//! ```
//!
//! Each invocation declares `fn unit_test_<label>_<id><line>()`, where `<id>` comes from a counter that never repeats
//! within the crate being compiled (zero-padded to 20 digits) and `<line>` is the line the label is on.  The label can be reused freely, even
//! twice on one line through another macro.  Attributes, a visibility, and a return type go where they would on an
//! ordinary function.
//!
//! This crate does not collect or run the functions.  Something else has to: above, that is libtest via `#[test]`.
//!
//! Names are only unique within one crate.  Two crates declaring the same label on the same line may well end up with
//! the same name, which is fine since they live in different crates.
//!
//! # Substituting the counter
//!
//! `unit_test! { unique_id = some_macro; label { ... } }` uses `some_macro` instead of [unique_id!] for the id.  A
//! counter source is called as `some_macro! { (callback path) rest... }` and must expand to
//! `callback path! { <integer literal>; rest... }`.  The substitute fully replaces the default, and nothing checks that
//! it actually counts.  A substitute which always returns the same value makes the line the only thing keeping names
//! apart, so two uses of one label on one line redeclare the same function:
//!
//! ```compile_fail
//! use unit_test::unit_test;
//!
//! macro_rules! always_seven {
//!     (($($callback:tt)*) $($rest:tt)*) => {
//!         $($callback)*! { 7; $($rest)* }
//!     };
//! }
//!
//! macro_rules! twice {
//!     ($label:ident) => {
//!         unit_test! { unique_id = always_seven; $label {} }
//!         unit_test! { unique_id = always_seven; $label {} }
//!     };
//! }
//!
//! twice!(foo);
//! # fn main() {}
//! ```
//!
//! The same macro with the default counter is fine:
//!
//! ```
//! use unit_test::unit_test;
//!
//! macro_rules! twice {
//!     ($label:ident) => {
//!         unit_test! { $label {} }
//!         unit_test! { $label {} }
//!     };
//! }
//!
//! twice!(foo);
//! # fn main() {}
//! ```
//!
//! # Errors
//!
//! All errors are compile errors.  A label which can't be part of an identifier is reported once it has been glued
//! into a name:
//!
//! ```compile_fail
//! use unit_test::unit_test;
//!
//! unit_test! { 1.5 {} }
//! # fn main() {}
//! ```
//!
//! The label must be a single token:
//!
//! ```compile_fail
//! use unit_test::unit_test;
//!
//! unit_test! { foo-bar {} }
//! # fn main() {}
//! ```
//!
//! For generating names from build scripts rather than macros, see [names::NameGenerator].

/// The naming rules, for code that emits functions itself.
pub use unit_test_names as names;

pub use unit_test_macro::unique_id;

#[doc(hidden)]
pub use unit_test_macro::unit_test_expand as __unit_test_expand;

/// Declare a uniquely named zero-argument function.  See the [crate] docs.
#[macro_export]
macro_rules! unit_test {
    (unique_id = $($source:ident)::+ ; $($rest:tt)*) => {
        $($source)::+! { ($crate::__unit_test_expand) $($rest)* }
    };
    ($($rest:tt)*) => {
        $crate::unique_id! { ($crate::__unit_test_expand) $($rest)* }
    };
}
