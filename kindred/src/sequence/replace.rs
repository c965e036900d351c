use crate::{
    kind::{Kind, SameKind},
    logic::Select,
};

use super::Sequence;

/// `Self` with the first element of kind `K` replaced by `U`.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::Replaced;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Replaced<Seq![u8, char, u8], u8, bool>, Seq![bool, char, u8]);
/// assert_type_eq_all!(Replaced<Seq![u8, char], bool, i8>, Seq![u8, char]);
/// ```
pub trait Replace<K: Kind, U>: Sequence {
    /// The sequence after replacement.
    type Result: Sequence;
}

impl<K: Kind, U> Replace<K, U> for () {
    type Result = ();
}

impl<K: Kind, U, H: SameKind<K>, T: Replace<K, U>> Replace<K, U> for (H, T)
where
    H::Result: Select<(U, T), (H, T::Result)>,
    <H::Result as Select<(U, T), (H, T::Result)>>::Result: Sequence,
{
    type Result = <H::Result as Select<(U, T), (H, T::Result)>>::Result;
}

/// `Self` with every element of kind `K` replaced by `U`.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::ReplacedAll;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(ReplacedAll<Seq![u8, char, u8], u8, bool>, Seq![bool, char, bool]);
/// ```
pub trait ReplaceAll<K: Kind, U>: Sequence {
    /// The sequence after replacement.
    type Result: Sequence;
}

impl<K: Kind, U> ReplaceAll<K, U> for () {
    type Result = ();
}

impl<K: Kind, U, H: SameKind<K>, T: ReplaceAll<K, U>> ReplaceAll<K, U> for (H, T)
where
    H::Result: Select<U, H>,
{
    type Result = (<H::Result as Select<U, H>>::Result, T::Result);
}
