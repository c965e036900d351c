//! Procedural macros used by and exported from the `kindred` crate. Their expansion logic lives
//! in `kindred-compiler`; this crate only crosses the `proc_macro` boundary.

extern crate proc_macro;

use {
    kindred_compiler::{
        kind::{ForeignKinds, KindDef},
        slot::SlotDef,
        tuples::TupleImpls,
        unary::UnaryImpls,
    },
    proc_macro::TokenStream,
    quote::ToTokens,
    syn::{parse_macro_input, DeriveInput},
};

/// Derive `Kind`, so the type can be an element of a kind-sequence.
///
/// The kind's identity is a hash of its name. Two kinds with the same name (say, `Error` in two
/// different modules) would be considered the same kind; rename one of them with
/// `#[kind(name = "...")]`:
///
/// ```
/// use kindred::prelude::*;
///
/// mod io {
///     #[derive(kindred::Kind)]
///     #[kind(name = "io::Error")]
///     pub struct Error;
/// }
///
/// #[derive(Kind)]
/// struct Error;
///
/// assert_eq!(<Seq![Error, io::Error] as IndexOf<io::Error>>::VALUE, 1);
/// ```
///
/// Type parameters are part of the identity, and must themselves be kinds:
///
/// ```
/// use kindred::prelude::*;
///
/// #[derive(Kind)]
/// struct Tagged<T>(T);
///
/// assert_eq!(<Seq![Tagged<u8>, Tagged<u16>] as IndexOf<Tagged<u16>>>::VALUE, 1);
/// ```
///
/// Lifetime and const parameters are not supported:
///
/// ```compile_fail
/// use kindred::prelude::*;
///
/// #[derive(Kind)]
/// struct Borrowed<'a>(&'a str);
/// ```
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match KindDef::from_derive(&input) {
        Ok(def) => def.into_token_stream().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Derive `Slot`, exposing a whole unit to the field accessors.
///
/// A field marked `#[slot(next)]` is the unit's successor in a linear chain, and the derive
/// additionally implements `Chained` for it:
///
/// ```
/// use kindred::prelude::*;
///
/// #[derive(Debug, Default, Slot)]
/// struct Counted<Next> {
///     count: usize,
///     #[slot(next)]
///     rest: Next,
/// }
///
/// let unit = Counted { count: 1, rest: Counted { count: 2, rest: Empty } };
/// assert_eq!(unit.next().count, 2);
/// ```
#[proc_macro_derive(Slot, attributes(slot))]
pub fn derive_slot(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match SlotDef::from_derive(&input) {
        Ok(def) => def.into_token_stream().into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Implement `Kind` for a list of foreign types, hashing each type as written.
#[doc(hidden)]
#[proc_macro]
pub fn impl_kinds(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as ForeignKinds)
        .into_token_stream()
        .into()
}

/// Implement `Tuple` and `List` for every tuple up to the given arity.
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as TupleImpls)
        .into_token_stream()
        .into()
}

/// Implement `ToUnary` and `ToConstant` for every number up to the given bound.
#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    parse_macro_input!(input as UnaryImpls)
        .into_token_stream()
        .into()
}
