//! Conversions back and forth between flat tuples and their corresponding inductive lists.
//!
//! Kind-sequences are inductive lists `(A, (B, (C, ())))`, but values are friendlier to write as
//! flat tuples `(a, b, c)`. The traits here convert between the two, at the type level and at the
//! value level.
//!
//! ```
//! use kindred::tuple::{List, Tuple};
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(<(u8, char) as Tuple>::AsList, (u8, (char, ())));
//! assert_eq!((1u8, 'x').into_list(), (1u8, ('x', ())));
//! assert_eq!((1u8, ('x', ())).into_tuple(), (1u8, 'x'));
//! ```
//!
//! At present, tuples up to size 64 are supported.

/// Convert a tuple into its corresponding inductive list.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Nest the elements of this tuple into a list.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Flatten this list into a tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

kindred_macro::impl_tuples!(64);
