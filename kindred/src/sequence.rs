//! Kind-sequences and their algebra.
//!
//! A kind-sequence is an inductive list: `()` is the empty sequence and `(H, T)` puts the kind `H`
//! in front of the sequence `T`. The [`Seq!`](crate::Seq) macro writes them flat:
//!
//! ```
//! use kindred::prelude::*;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(Seq![u8, char, u8], (u8, (char, (u8, ()))));
//! assert_type_eq_all!(Seq![], ());
//! ```
//!
//! Each operation of the algebra is a trait implemented on sequences, computing its answer as an
//! associated `Result` type (or a `VALUE` constant), along with a type alias to name that answer
//! directly. Everything is resolved while type checking; nothing exists at run time.
//!
//! | operation | trait | alias |
//! | --- | --- | --- |
//! | length | [`Sequence`] | [`LengthOf`] |
//! | kind at a position | [`TypeAt`] | [`KindAt`] |
//! | position of a kind | [`IndexOf`] | [`PositionOf`] |
//! | number of occurrences | [`Occurrences`] | [`CountOf`] |
//! | append a kind or a sequence | [`Append`] | [`Appended`] |
//! | erase the first occurrence | [`Erase`] | [`Erased`] |
//! | erase every occurrence | [`EraseAll`] | [`ErasedAll`] |
//! | keep only first occurrences | [`NoDuplicates`] | [`Deduplicated`] |
//! | replace the first occurrence | [`Replace`] | [`Replaced`] |
//! | replace every occurrence | [`ReplaceAll`] | [`ReplacedAll`] |
//! | reverse | [`Reverse`] | [`Reversed`] |
//!
//! Operations that compare kinds require every element they look at to be a [`Kind`]; length,
//! positional lookup, appending a sequence and reversal work on any element types.

use crate::unary::{Unary, S, Z};

#[allow(unused_imports)] // For documentation linking
use crate::kind::Kind;

mod append;
mod erase;
mod lookup;
mod replace;

pub use append::{Append, AsSequence, Reverse};
pub use erase::{Erase, EraseAll, NoDuplicates};
pub use lookup::{
    Absent, Contains, ExactlyOne, Found, IndexOf, Occurrences, Position, Present, TypeAt, Unique,
};
pub use replace::{Replace, ReplaceAll};

/// Write a kind-sequence as a flat list of types.
///
/// `Seq![A, B, C]` is `(A, (B, (C, ())))` and `Seq![]` is `()`.
#[macro_export]
macro_rules! Seq {
    () => { () };
    ($head:ty $(, $tail:ty)* $(,)?) => { ($head, $crate::Seq![$($tail),*]) };
}

/// A kind-sequence: `()` or `(H, T)` where `T` is a sequence.
///
/// This trait is sealed, so every type implementing it is a well-formed sequence.
pub trait Sequence: sealed::Sequence + Sized {
    /// The number of elements, as a unary number.
    type Length: Unary;

    /// The number of elements.
    const LENGTH: usize = <Self::Length as Unary>::VALUE;
}

impl Sequence for () {
    type Length = Z;
}

impl<H, T: Sequence> Sequence for (H, T) {
    type Length = S<T::Length>;
}

/// The length of a sequence, as a unary number.
pub type LengthOf<Kinds> = <Kinds as Sequence>::Length;

/// The kind at position `I`.
pub type KindAt<Kinds, const I: usize> = <Kinds as TypeAt<crate::unary::UnaryOf<I>>>::Result;

/// The [`Position`] of the first occurrence of `K`.
pub type PositionOf<Kinds, K> = <Kinds as IndexOf<K>>::Result;

/// How many times `K` occurs, as a unary number.
pub type CountOf<Kinds, K> = <Kinds as Occurrences<K>>::Result;

/// `Kinds` followed by `X`, a kind or a sequence.
pub type Appended<Kinds, X> = <Kinds as Append<X>>::Result;

/// `Kinds` without the first occurrence of `K`.
pub type Erased<Kinds, K> = <Kinds as Erase<K>>::Result;

/// `Kinds` without any occurrence of `K`.
pub type ErasedAll<Kinds, K> = <Kinds as EraseAll<K>>::Result;

/// `Kinds` keeping only the first occurrence of each kind.
pub type Deduplicated<Kinds> = <Kinds as NoDuplicates>::Result;

/// `Kinds` with the first occurrence of `K` replaced by `U`.
pub type Replaced<Kinds, K, U> = <Kinds as Replace<K, U>>::Result;

/// `Kinds` with every occurrence of `K` replaced by `U`.
pub type ReplacedAll<Kinds, K, U> = <Kinds as ReplaceAll<K, U>>::Result;

/// `Kinds` in reverse order.
pub type Reversed<Kinds> = <Kinds as Reverse>::Result;

mod sealed {
    pub trait Sequence {}
    impl Sequence for () {}
    impl<H, T: Sequence> Sequence for (H, T) {}
}
