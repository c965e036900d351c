//! Unary type-level numbers, zero [`Z`] and successor [`S`], used for positions and lengths in
//! kind-sequences.

/// The number zero.
///
/// # Examples
///
/// ```
/// use kindred::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use kindred::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// Write a unary number as a constant: `UnaryOf<2>` is `S<S<Z>>`.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// Every unary number has a `usize` value.
///
/// # Examples
///
/// ```
/// use kindred::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<3>>::VALUE, 3);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// A unary number strictly less than `N`: how a position is checked against a length.
///
/// ```
/// use kindred::unary::*;
///
/// fn ok() where UnaryOf<1>: LessThan<UnaryOf<2>> {}
/// ```
///
/// Equal is not less:
///
/// ```compile_fail
/// use kindred::unary::*;
///
/// fn bad() where UnaryOf<2>: LessThan<UnaryOf<2>> {}
/// ```
#[diagnostic::on_unimplemented(
    message = "position exceeds sequence length",
    label = "position `{Self}` is not less than the length `{N}`"
)]
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A type-level `usize`, so traits can be implemented on constants.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// Convert a [`Number`] to its unary representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// Convert a unary number back to a [`Number`].
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

kindred_macro::generate_unary_conversion_impls!(256);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}
}
