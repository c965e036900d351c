use crate::kind::Kind;

use super::Sequence;

/// Something that can be appended to a sequence: a sequence as itself, or a single kind as the
/// sequence holding only it.
pub trait AsSequence {
    /// The sequence to append.
    type Result: Sequence;
}

impl AsSequence for () {
    type Result = ();
}

impl<H, T: Sequence> AsSequence for (H, T) {
    type Result = (H, T);
}

impl<K: Kind> AsSequence for K {
    type Result = (K, ());
}

/// `Self` followed by `X`, where `X` is a kind or a sequence.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::Appended;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Appended<Seq![], Seq![]>, Seq![]);
/// assert_type_eq_all!(Appended<Seq![], u8>, Seq![u8]);
/// assert_type_eq_all!(Appended<Seq![u8], char>, Seq![u8, char]);
/// assert_type_eq_all!(Appended<Seq![u8], Seq![char, bool]>, Seq![u8, char, bool]);
/// ```
pub trait Append<X>: Sequence {
    /// The combined sequence.
    type Result: Sequence;
}

impl<X: AsSequence> Append<X> for () {
    type Result = X::Result;
}

impl<H, T: Append<X>, X> Append<X> for (H, T) {
    type Result = (H, T::Result);
}

/// The elements of `Self` in reverse order.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::sequence::Reversed;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Reversed<Seq![u8, char, bool]>, Seq![bool, char, u8]);
/// assert_type_eq_all!(Reversed<Seq![]>, Seq![]);
/// ```
pub trait Reverse: Sequence {
    /// The reversed sequence.
    type Result: Sequence;
}

impl Reverse for () {
    type Result = ();
}

impl<H, T: Reverse> Reverse for (H, T)
where
    T::Result: Append<(H, ())>,
{
    type Result = <T::Result as Append<(H, ())>>::Result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sequence::Reversed, Seq};
    use static_assertions::assert_type_eq_all;

    struct NotAKind;

    #[test]
    fn reverse_any_element_type() {
        assert_type_eq_all!(Reversed<Seq![NotAKind, u8]>, Seq![u8, NotAKind]);
        assert_type_eq_all!(Reversed<Reversed<Seq![NotAKind, u8, char]>>, Seq![NotAKind, u8, char]);
    }

    #[test]
    fn append_sequences_of_any_element_type() {
        assert_type_eq_all!(
            <Seq![u8] as Append<Seq![NotAKind]>>::Result,
            Seq![u8, NotAKind]
        );
    }
}
