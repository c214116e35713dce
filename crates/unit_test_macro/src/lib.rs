//! Proc macros behind `unit_test!`.  Use the `unit_test` crate rather than this one directly.
//!
//! Naming a function takes two expansions.  [unique_id!] is the counter source: it reads the next id and hands it to a
//! callback macro.  [unit_test_expand!] is that callback: it glues the id, the label, and the label's line into a
//! function name.  The split matters because the id has to be a concrete literal by the time anything is concatenated,
//! and the only way for one macro to see another's output is to be called by it.
//!
//! Procmacro limitations require the entrypoints to live at the root; the work happens in the modules.
mod expand;
mod unique_id_impl;

use unit_test_names::SequenceCounter;

/// One per rustc process, and rustc compiles one crate per process.
static UNIQUE_IDS: SequenceCounter = SequenceCounter::new(0);

/// The default counter source.
///
/// `unique_id! { (path::to::callback) tokens... }` expands to `path::to::callback! { <id>; tokens... }` where `<id>`
/// is an unsuffixed integer literal never handed out before in this crate.  Substitute counter sources must follow the
/// same protocol.
#[proc_macro]
#[proc_macro_error::proc_macro_error]
pub fn unique_id(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match unique_id_impl::unique_id_impl(input.into(), &UNIQUE_IDS) {
        Ok(t) => t.into(),
        Err(e) => proc_macro_error::abort!(e.span(), "{}", e),
    }
}

/// The concatenation step: `unit_test_expand! { <id>; <attrs> <vis> <label> [-> Ret] { body } }`.
///
/// Produces `<attrs> <vis> fn unit_test_<label>_<id><line>() [-> Ret] { body }`, where `<id>` is zero-padded and `<line>` is the line the label
/// was written on.
#[proc_macro]
#[proc_macro_error::proc_macro_error]
pub fn unit_test_expand(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let parsed = syn::parse_macro_input!(input as expand::UnitTestInput);
    let line = parsed.label_span().unwrap().line();
    let line = match u32::try_from(line) {
        Ok(l) => l,
        Err(_) => proc_macro_error::abort!(parsed.label_span(), "Line {} does not fit in a u32", line),
    };

    match parsed.expand(line) {
        Ok(t) => t.into(),
        Err(e) => proc_macro_error::abort!(e.span(), "{}", e),
    }
}
