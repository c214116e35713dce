//! Naming rules for uniquely named unit test functions.
//!
//! A unique name is `unit_test_<label>_<id><line>`: a fixed prefix, the caller's label, a separator, then a value from
//! a counter source, zero-padded to [ID_WIDTH] digits and glued directly to the line the name was requested from.  The counter alone is what makes names
//! unique; the line is there so that a human can find the declaration again.
//!
//! Uniqueness only holds within one compilation unit, which for Rust means one crate built by one rustc invocation (or
//! one [NameGenerator] in a build script).  Two crates, or two generators, can and will hand out the same names.
//!
//! This crate is shared by the `unit_test_macro` proc macros and by build scripts which emit code themselves.  It does
//! not collect or run anything.
mod counter;
mod error;
mod generator;
mod name;

pub use counter::*;
pub use error::*;
pub use generator::*;
pub use name::*;
