use crate::{
    kind::{Kind, SameKind},
    logic::Select,
};

use super::Sequence;

/// `Self` without the first element of kind `K`; unchanged if there is none.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::Erased;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Erased<Seq![u8, char, u8], u8>, Seq![char, u8]);
/// assert_type_eq_all!(Erased<Seq![u8, char], bool>, Seq![u8, char]);
/// ```
pub trait Erase<K: Kind>: Sequence {
    /// The remaining sequence.
    type Result: Sequence;
}

impl<K: Kind> Erase<K> for () {
    type Result = ();
}

impl<K: Kind, H: SameKind<K>, T: Erase<K>> Erase<K> for (H, T)
where
    H::Result: Select<T, (H, T::Result)>,
    <H::Result as Select<T, (H, T::Result)>>::Result: Sequence,
{
    type Result = <H::Result as Select<T, (H, T::Result)>>::Result;
}

/// `Self` without any element of kind `K`.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::ErasedAll;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ErasedAll<Seq![u8, char, u8], u8>, Seq![char]);
/// ```
pub trait EraseAll<K: Kind>: Sequence {
    /// The remaining sequence.
    type Result: Sequence;
}

impl<K: Kind> EraseAll<K> for () {
    type Result = ();
}

impl<K: Kind, H: SameKind<K>, T: EraseAll<K>> EraseAll<K> for (H, T)
where
    H::Result: Select<T::Result, (H, T::Result)>,
    <H::Result as Select<T::Result, (H, T::Result)>>::Result: Sequence,
{
    type Result = <H::Result as Select<T::Result, (H, T::Result)>>::Result;
}

/// `Self` keeping only the first element of each kind, in their original order.
///
/// The tail is deduplicated first, then the head's kind is erased from it and the head put back in
/// front.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::Deduplicated;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Deduplicated<Seq![u8, char, u8, bool, char]>, Seq![u8, char, bool]);
/// ```
pub trait NoDuplicates: Sequence {
    /// The deduplicated sequence.
    type Result: Sequence;
}

impl NoDuplicates for () {
    type Result = ();
}

impl<H: Kind, T: NoDuplicates> NoDuplicates for (H, T)
where
    T::Result: Erase<H>,
{
    type Result = (H, <T::Result as Erase<H>>::Result);
}
