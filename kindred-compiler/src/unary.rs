//! Conversions between `Number<N>` constants and unary `S<...Z>` numbers.

use {
    proc_macro2::{Literal, Span, TokenStream},
    quote::{quote, ToTokens},
    syn::{
        parse::{Parse, ParseStream},
        LitInt,
    },
};

use crate::path::kindred_crate;

/// The argument to `generate_unary_conversion_impls!`: the largest number to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnaryImpls {
    pub max: usize,
}

impl Parse for UnaryImpls {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let max = input.parse::<LitInt>()?.base10_parse()?;
        Ok(UnaryImpls { max })
    }
}

impl ToTokens for UnaryImpls {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let krate = kindred_crate(Span::call_site());
        let mut unary = quote!(#krate::unary::Z);
        for n in 0..=self.max {
            let n = Literal::usize_unsuffixed(n);
            quote! {
                impl #krate::unary::ToUnary for #krate::unary::Number<#n> {
                    type AsUnary = #unary;
                }

                impl #krate::unary::ToConstant for #unary {
                    type AsConstant = #krate::unary::Number<#n>;
                }
            }
            .to_tokens(tokens);
            unary = quote!(#krate::unary::S<#unary>);
        }
    }
}
