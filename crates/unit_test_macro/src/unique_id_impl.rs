use proc_macro2::{Delimiter, Span, TokenStream, TokenTree};
use quote::quote;

use unit_test_names::CounterSource;

/// Pull the next id from `counter` and forward it, with everything after the callback, to the callback.
pub(crate) fn unique_id_impl(
    input: TokenStream,
    counter: &impl CounterSource,
) -> syn::Result<TokenStream> {
    let mut tokens = input.into_iter();

    let callback = match tokens.next() {
        Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Parenthesis => g.stream(),
        other => {
            let span = other.map(|t| t.span()).unwrap_or_else(Span::call_site);
            return Err(syn::Error::new(
                span,
                "Expected the callback macro's path in parentheses, e.g. `(my_crate::callback)`",
            ));
        }
    };

    if callback.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "The callback macro's path is empty",
        ));
    }

    let rest = tokens.collect::<TokenStream>();
    let id = proc_macro2::Literal::u64_unsuffixed(counter.next_id());

    Ok(quote!(#callback ! { #id ; #rest }))
}
