//! Kinds: the types that may appear as elements of a kind-sequence, and deciding whether two of
//! them are the same.
//!
//! Without specialization, "is `A` the same type as `B`" cannot be asked of arbitrary types. So
//! every kind carries a type-level [`Identity`], built by `#[derive(Kind)]` from a hash of the
//! type's name, and two kinds are the same when their identities are structurally equal.
//!
//! ```
//! use kindred::prelude::*;
//! use kindred::logic::{Bool, True, False};
//! use static_assertions::assert_type_eq_all;
//!
//! #[derive(Kind)]
//! struct Width;
//!
//! #[derive(Kind)]
//! struct Height;
//!
//! assert_type_eq_all!(<Width as SameKind<Width>>::Result, True);
//! assert_type_eq_all!(<Width as SameKind<Height>>::Result, False);
//! assert!(!<u8 as SameKind<u16>>::Result::VALUE);
//! ```
//!
//! Identities are hashes of names, so two distinct types that share a name are the same kind
//! unless one of them is renamed with `#[kind(name = "...")]`. Everything in the sequence algebra
//! that compares kinds ([`IndexOf`](crate::sequence::IndexOf), the erase and replace family,
//! deduplication) treats them as one. Keyed field access additionally checks that the slot it
//! found holds exactly the requested type, so it rejects such a kind rather than return the other
//! one's slot.

use crate::logic::{And, Bool, False, True};

/// An element type of a kind-sequence.
///
/// Implement it with `#[derive(Kind)]`. Sequences themselves (`()` and pairs) are never kinds.
pub trait Kind {
    /// The type-level identity of this kind.
    type Id: Identity;
}

/// A zero bit of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct B0;

/// A one bit of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct B1;

/// A tree of [`B0`] and [`B1`] leaves built from `()` and pairs.
pub trait Identity: sealed::Identity + 'static {}

impl Identity for () {}
impl Identity for B0 {}
impl Identity for B1 {}
impl<A: Identity, B: Identity> Identity for (A, B) {}

/// Structural equality of identities.
pub trait IdEq<Other> {
    /// [`True`] if `Self` and `Other` are the same tree.
    type Result: Bool;
}

impl IdEq<()> for () {
    type Result = True;
}

impl IdEq<B0> for () {
    type Result = False;
}

impl IdEq<B1> for () {
    type Result = False;
}

impl<C, D> IdEq<(C, D)> for () {
    type Result = False;
}

impl IdEq<()> for B0 {
    type Result = False;
}

impl IdEq<B0> for B0 {
    type Result = True;
}

impl IdEq<B1> for B0 {
    type Result = False;
}

impl<C, D> IdEq<(C, D)> for B0 {
    type Result = False;
}

impl IdEq<()> for B1 {
    type Result = False;
}

impl IdEq<B0> for B1 {
    type Result = False;
}

impl IdEq<B1> for B1 {
    type Result = True;
}

impl<C, D> IdEq<(C, D)> for B1 {
    type Result = False;
}

impl<A, B> IdEq<()> for (A, B) {
    type Result = False;
}

impl<A, B> IdEq<B0> for (A, B) {
    type Result = False;
}

impl<A, B> IdEq<B1> for (A, B) {
    type Result = False;
}

impl<A, B, C, D> IdEq<(C, D)> for (A, B)
where
    A: IdEq<C>,
    B: IdEq<D>,
    <A as IdEq<C>>::Result: And<<B as IdEq<D>>::Result>,
{
    type Result = <<A as IdEq<C>>::Result as And<<B as IdEq<D>>::Result>>::Result;
}

/// Whether two kinds are the same kind.
pub trait SameKind<K: Kind>: Kind {
    /// [`True`] if `Self` and `K` have the same identity.
    type Result: Bool;
}

impl<A: Kind, B: Kind> SameKind<B> for A
where
    A::Id: IdEq<B::Id>,
{
    type Result = <A::Id as IdEq<B::Id>>::Result;
}

kindred_macro::impl_kinds!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

mod sealed {
    pub trait Identity {}
    impl Identity for () {}
    impl Identity for super::B0 {}
    impl Identity for super::B1 {}
    impl<A: Identity, B: Identity> Identity for (A, B) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_type_eq_all};

    #[derive(kindred_macro::Kind)]
    struct Red;

    #[derive(kindred_macro::Kind)]
    struct Green;

    #[derive(kindred_macro::Kind)]
    #[kind(name = "Red")]
    struct Crimson;

    #[derive(kindred_macro::Kind)]
    struct Tagged<T>(T);

    #[test]
    fn identities_compare_structurally() {
        assert_type_eq_all!(<(B0, B1) as IdEq<(B0, B1)>>::Result, True);
        assert_type_eq_all!(<(B0, B1) as IdEq<(B1, B1)>>::Result, False);
        assert_type_eq_all!(<((B0, B1), ()) as IdEq<(B0, B1)>>::Result, False);
        assert_type_eq_all!(<() as IdEq<()>>::Result, True);
    }

    #[test]
    fn derived_kinds() {
        assert_impl_all!(Red: Kind);
        assert_type_eq_all!(<Red as SameKind<Red>>::Result, True);
        assert_type_eq_all!(<Red as SameKind<Green>>::Result, False);
        // Renamed to collide on purpose.
        assert_type_eq_all!(<Red as SameKind<Crimson>>::Result, True);
    }

    #[test]
    fn generic_kinds_distinguish_parameters() {
        assert_type_eq_all!(<Tagged<Red> as SameKind<Tagged<Red>>>::Result, True);
        assert_type_eq_all!(<Tagged<Red> as SameKind<Tagged<Green>>>::Result, False);
        assert_type_eq_all!(<Tagged<Red> as SameKind<Red>>::Result, False);
    }

    #[test]
    fn foreign_kinds() {
        assert_type_eq_all!(<u8 as SameKind<u8>>::Result, True);
        assert_type_eq_all!(<u8 as SameKind<i8>>::Result, False);
        assert_type_eq_all!(<String as SameKind<&'static str>>::Result, False);
    }
}
