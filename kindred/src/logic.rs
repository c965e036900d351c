//! Type-level booleans, and choosing between two types by one.

/// Type-level truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// Type-level falsehood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// Either [`True`] or [`False`].
pub trait Bool: sealed::Bool + Sized + 'static {
    /// The runtime value of this boolean.
    const VALUE: bool;
}

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

/// Conjunction of two type-level booleans.
///
/// ```
/// use kindred::logic::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<True as And<True>>::Result, True);
/// assert_type_eq_all!(<True as And<False>>::Result, False);
/// assert_type_eq_all!(<False as And<True>>::Result, False);
/// ```
pub trait And<B: Bool>: Bool {
    /// `True` exactly when both are.
    type Result: Bool;
}

impl<B: Bool> And<B> for True {
    type Result = B;
}

impl<B: Bool> And<B> for False {
    type Result = False;
}

/// Pick `IfTrue` or `IfFalse` depending on `Self`.
///
/// ```
/// use kindred::logic::*;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<True as Select<u8, u16>>::Result, u8);
/// assert_type_eq_all!(<False as Select<u8, u16>>::Result, u16);
/// ```
pub trait Select<IfTrue, IfFalse>: Bool {
    /// The chosen type.
    type Result;
}

impl<IfTrue, IfFalse> Select<IfTrue, IfFalse> for True {
    type Result = IfTrue;
}

impl<IfTrue, IfFalse> Select<IfTrue, IfFalse> for False {
    type Result = IfFalse;
}

mod sealed {
    pub trait Bool {}
    impl Bool for super::True {}
    impl Bool for super::False {}
}
