use crate::{
    kind::{Kind, SameKind},
    logic::Select,
    unary::{Unary, S, Z},
};

use super::Sequence;

/// The element at position `N`.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::KindAt;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(KindAt<Seq![u8, char, bool], 1>, char);
/// ```
///
/// There is nothing past the end:
///
/// ```compile_fail
/// use kindred::prelude::*;
/// use kindred::sequence::KindAt;
///
/// let _: Option<KindAt<Seq![u8, char], 2>> = None;
/// ```
#[diagnostic::on_unimplemented(
    message = "position exceeds sequence length",
    label = "`{Self}` has no element at position `{N}`"
)]
pub trait TypeAt<N: Unary>: Sequence {
    /// The element at position `N`.
    type Result;
}

impl<H, T: Sequence> TypeAt<Z> for (H, T) {
    type Result = H;
}

impl<H, T: TypeAt<N>, N: Unary> TypeAt<S<N>> for (H, T) {
    type Result = T::Result;
}

/// The answer of [`IndexOf`]: either [`Absent`] or [`Found`] at some unary position.
pub trait Position: sealed::Position {
    /// The position as a signed index, `-1` when absent.
    const VALUE: isize;

    /// This position, one element further along.
    type Shifted: Position;
}

/// The kind does not occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Absent;

/// The kind first occurs at position `N`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Found<N>(pub N);

impl Position for Absent {
    const VALUE: isize = -1;
    type Shifted = Absent;
}

impl<N: Unary> Position for Found<N> {
    const VALUE: isize = N::VALUE as isize;
    type Shifted = Found<S<N>>;
}

/// The position of the first occurrence of `K`; `-1` when `K` does not occur.
///
/// Kinds are compared by identity, so a kind sharing `K`'s name counts as an occurrence of `K`.
///
/// ```
/// use kindred::prelude::*;
///
/// assert_eq!(<Seq![u8, char, u8] as IndexOf<u8>>::VALUE, 0);
/// assert_eq!(<Seq![u8, char, u8] as IndexOf<char>>::VALUE, 1);
/// assert_eq!(<Seq![u8, char, u8] as IndexOf<bool>>::VALUE, -1);
/// assert_eq!(<Seq![] as IndexOf<bool>>::VALUE, -1);
/// ```
pub trait IndexOf<K: Kind>: Sequence {
    /// [`Absent`] or [`Found`].
    type Result: Position;

    /// The position as a signed index.
    const VALUE: isize = <Self::Result as Position>::VALUE;
}

impl<K: Kind> IndexOf<K> for () {
    type Result = Absent;
}

impl<K: Kind, H: SameKind<K>, T: IndexOf<K>> IndexOf<K> for (H, T)
where
    H::Result: Select<Found<Z>, <T::Result as Position>::Shifted>,
    <H::Result as Select<Found<Z>, <T::Result as Position>::Shifted>>::Result: Position,
{
    type Result = <H::Result as Select<Found<Z>, <T::Result as Position>::Shifted>>::Result;
}

/// How many elements are the kind `K`.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::unary::Unary;
/// use kindred::sequence::CountOf;
///
/// assert_eq!(<CountOf<Seq![u8, char, u8], u8>>::VALUE, 2);
/// assert_eq!(<CountOf<Seq![u8, char, u8], bool>>::VALUE, 0);
/// ```
pub trait Occurrences<K: Kind>: Sequence {
    /// The count, as a unary number.
    type Result: Unary;
}

impl<K: Kind> Occurrences<K> for () {
    type Result = Z;
}

impl<K: Kind, H: SameKind<K>, T: Occurrences<K>> Occurrences<K> for (H, T)
where
    H::Result: Select<S<T::Result>, T::Result>,
    <H::Result as Select<S<T::Result>, T::Result>>::Result: Unary,
{
    type Result = <H::Result as Select<S<T::Result>, T::Result>>::Result;
}

/// A [`Position`] that was found.
#[diagnostic::on_unimplemented(
    message = "kind does not occur in the sequence",
    label = "the kind was searched for but is `{Self}`"
)]
pub trait Present: Position {
    /// Where it was found.
    type Index: Unary;
}

impl<N: Unary> Present for Found<N> {
    type Index = N;
}

/// Sequences in which `K` occurs at least once.
pub trait Contains<K: Kind>: IndexOf<K> {
    /// The position of the first occurrence.
    type Index: Unary;
}

impl<K: Kind, Kinds> Contains<K> for Kinds
where
    Kinds: IndexOf<K>,
    Kinds::Result: Present,
{
    type Index = <Kinds::Result as Present>::Index;
}

/// The count `1`.
#[diagnostic::on_unimplemented(
    message = "kind occurs zero or several times; use positional access",
    label = "the kind occurs `{Self}` times"
)]
pub trait ExactlyOne: Unary {}

impl ExactlyOne for S<Z> {}

/// Sequences in which `K` occurs exactly once, so it can address a single element.
///
/// ```
/// use kindred::prelude::*;
/// use static_assertions::{assert_impl_all, assert_not_impl_any};
///
/// assert_impl_all!(Seq![u8, char]: Unique<u8>);
/// assert_not_impl_any!(Seq![u8, char, u8]: Unique<u8>);
/// assert_not_impl_any!(Seq![u8, char]: Unique<bool>);
/// ```
pub trait Unique<K: Kind>: Contains<K> + Occurrences<K> {}

impl<K: Kind, Kinds> Unique<K> for Kinds
where
    Kinds: Contains<K> + Occurrences<K>,
    <Kinds as Occurrences<K>>::Result: ExactlyOne,
{
}

mod sealed {
    pub trait Position {}
    impl Position for super::Absent {}
    impl<N> Position for super::Found<N> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seq;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    #[test]
    fn type_at_any_element_type() {
        struct NotAKind;
        assert_type_eq_all!(<Seq![NotAKind, u8] as TypeAt<S<Z>>>::Result, u8);
        assert_type_eq_all!(<Seq![NotAKind, u8] as TypeAt<Z>>::Result, NotAKind);
        assert_not_impl_any!(Seq![NotAKind, u8]: TypeAt<S<S<Z>>>);
    }

    #[test]
    fn first_match_wins() {
        assert_type_eq_all!(<Seq![char, u8, u8] as IndexOf<u8>>::Result, Found<S<Z>>);
        assert_type_eq_all!(<Seq![char, u8, u8] as Contains<u8>>::Index, S<Z>);
        assert_not_impl_any!(Seq![char, u8]: Contains<bool>);
    }

    #[test]
    fn occurrences() {
        assert_type_eq_all!(<Seq![u8, char, u8] as Occurrences<u8>>::Result, S<S<Z>>);
        assert_impl_all!(Seq![u8, char]: Unique<char>);
    }
}
