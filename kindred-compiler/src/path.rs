//! Resolving the path generated code uses to name the `kindred` library.

use {
    proc_macro2::{Span, TokenStream},
    proc_macro_crate::{crate_name, FoundCrate},
    quote::quote,
    syn::Ident,
};

/// The path to the `kindred` crate as seen from the crate being expanded.
///
/// A renamed dependency is honored. Inside `kindred` itself, and whenever the manifest can't be
/// read, this falls back to `::kindred`, which the library makes valid for its own code with
/// `extern crate self as kindred`.
pub fn kindred_crate(span: Span) -> TokenStream {
    match crate_name("kindred") {
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, span);
            quote!(::#ident)
        }
        Ok(FoundCrate::Itself) | Err(_) => {
            let ident = Ident::new("kindred", span);
            quote!(::#ident)
        }
    }
}
