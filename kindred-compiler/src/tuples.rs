//! Flat tuple ↔ inductive list conversions, generated for every arity up to a bound.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote, ToTokens},
    syn::{
        parse::{Parse, ParseStream},
        Ident, LitInt,
    },
};

use crate::path::kindred_crate;

/// The argument to `impl_tuples!`: the largest arity to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TupleImpls {
    pub arity: usize,
}

impl Parse for TupleImpls {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let arity = input.parse::<LitInt>()?.base10_parse()?;
        Ok(TupleImpls { arity })
    }
}

fn nest(items: &[Ident]) -> TokenStream {
    items
        .iter()
        .rev()
        .fold(quote!(()), |rest, item| quote!((#item, #rest)))
}

impl ToTokens for TupleImpls {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let krate = kindred_crate(Span::call_site());
        for n in 0..=self.arity {
            let tys: Vec<Ident> = (0..n).map(|i| format_ident!("T{}", i)).collect();
            let vals: Vec<Ident> = (0..n).map(|i| format_ident!("t{}", i)).collect();
            let list_ty = nest(&tys);
            let list_val = nest(&vals);

            quote! {
                impl<#(#tys),*> #krate::tuple::Tuple for (#(#tys,)*) {
                    type AsList = #list_ty;

                    #[allow(clippy::unused_unit)]
                    fn into_list(self) -> Self::AsList {
                        let (#(#vals,)*) = self;
                        #list_val
                    }
                }

                impl<#(#tys),*> #krate::tuple::List for #list_ty {
                    type AsTuple = (#(#tys,)*);

                    #[allow(clippy::unused_unit)]
                    fn into_tuple(self) -> Self::AsTuple {
                        let #list_val = self;
                        (#(#vals,)*)
                    }
                }
            }
            .to_tokens(tokens);
        }
    }
}
