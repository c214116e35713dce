use proc_macro2::{Delimiter, Span, TokenStream, TokenTree};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::Token;

use unit_test_names::UniqueName;

/// `<id>; <attrs> <vis> <label> [-> Ret] { body }`
pub(crate) struct UnitTestInput {
    /// Whatever the counter source produced.  Should be an integer literal; checked at expansion.
    id: TokenTree,
    attrs: Vec<syn::Attribute>,
    vis: syn::Visibility,

    /// A single identifier or literal.  Checked only as part of the concatenated name.
    label: TokenTree,
    output: syn::ReturnType,
    block: syn::Block,
}

/// Tokens forwarded through a `macro_rules!` fragment can arrive wrapped in an invisible group.
fn ungroup(tt: TokenTree) -> TokenTree {
    if let TokenTree::Group(g) = &tt {
        if g.delimiter() == Delimiter::None {
            let mut inner = g.stream().into_iter();
            if let (Some(only), None) = (inner.next(), inner.next()) {
                return ungroup(only);
            }
        }
    }

    tt
}

impl Parse for UnitTestInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let id = ungroup(input.parse()?);
        input.parse::<Token![;]>()?;
        let attrs = input.call(syn::Attribute::parse_outer)?;
        let vis = input.parse()?;

        let label = ungroup(input.parse()?);
        if !matches!(label, TokenTree::Ident(_) | TokenTree::Literal(_)) {
            return Err(syn::Error::new(
                label.span(),
                "Expected a label: a single identifier fragment such as `foo`",
            ));
        }

        let output = input.parse()?;
        let block = input.parse()?;

        Ok(UnitTestInput {
            id,
            attrs,
            vis,
            label,
            output,
            block,
        })
    }
}

impl UnitTestInput {
    pub(crate) fn label_span(&self) -> Span {
        self.label.span()
    }

    fn parse_id(&self) -> syn::Result<u64> {
        let err = || {
            syn::Error::new(
                self.id.span(),
                format!(
                    "The counter source must produce an integer literal, got `{}`",
                    self.id
                ),
            )
        };

        let TokenTree::Literal(lit) = &self.id else {
            return Err(err());
        };

        match syn::Lit::new(lit.clone()) {
            syn::Lit::Int(i) => i.base10_parse::<u64>(),
            _ => Err(err()),
        }
    }

    /// Build the function, taking `line` as the line the label was written on.
    pub(crate) fn expand(&self, line: u32) -> syn::Result<TokenStream> {
        let id = self.parse_id()?;

        let name = UniqueName::synthesize(&self.label.to_string(), id, line)
            .map_err(|e| syn::Error::new(self.label.span(), e))?;

        // The name carries the label's span, so it resolves and reports where the caller wrote the label.
        let mut ident = syn::parse_str::<syn::Ident>(&name.to_string()).map_err(|_| {
            syn::Error::new(
                self.label.span(),
                format!("`{name}` is not a valid identifier"),
            )
        })?;
        ident.set_span(self.label.span());

        let attrs = &self.attrs;
        let vis = &self.vis;
        let output = &self.output;
        let block = &self.block;

        Ok(quote!(
            #(#attrs)*
            #vis fn #ident() #output #block
        ))
    }
}
