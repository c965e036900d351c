//! Recovering a slot of a composite, by kind or by position.
//!
//! Each unit exposes the value accessors should see through [`Slot`]: a
//! [`ValueHolder`](crate::holder::ValueHolder) exposes the value it holds, a
//! [`Link`](crate::linear::Link) the value it stores, and any other unit, deriving `Slot`, exposes
//! itself.
//!
//! - By position, [`Fields::at`] reaches every slot, repeated kinds included.
//! - By kind, [`Fields::field`] reaches the slot of a kind occurring exactly once.
//! - [`Fields::unit_at`] and [`Fields::unit`] skip the [`Slot`] projection and return the unit
//!   itself, so composites of units that can't implement `Slot` (a `Vec<K>`, a `Box<K>`) are
//!   reachable too.
//!
//! A shared borrow of the composite yields a shared borrow of the slot, and a mutable borrow a
//! mutable one.
//!
//! ```
//! use kindred::prelude::*;
//!
//! let mut record = Record::<Seq![u8, u8, char]>::new((1, 2, 'c'));
//! *record.at_mut::<1>() += 40;
//! assert_eq!(*record.at::<0>(), 1);
//! assert_eq!(*record.at::<1>(), 42);
//! assert_eq!(*record.field::<char>(), 'c');
//! ```
//!
//! A repeated kind can't name a slot:
//!
//! ```compile_fail
//! use kindred::prelude::*;
//!
//! let record = Record::<Seq![u8, u8, char]>::new((1, 2, 'c'));
//! let _ = record.field::<u8>();
//! ```
//!
//! Nor can an absent one:
//!
//! ```compile_fail
//! use kindred::prelude::*;
//!
//! let record = Record::<Seq![u8, char]>::new((1, 'c'));
//! let _ = record.field::<bool>();
//! ```
//!
//! Kinds are told apart by name, so a kind named like one in the sequence is still rejected by
//! keyed access, which checks the slot's actual type:
//!
//! ```compile_fail
//! use kindred::prelude::*;
//!
//! mod a {
//!     #[derive(kindred::Kind)]
//!     pub struct Error;
//! }
//!
//! mod b {
//!     #[derive(kindred::Kind)]
//!     pub struct Error;
//! }
//!
//! let record = Record::<Seq![b::Error, u8]>::new((b::Error, 1));
//! let _ = record.field::<a::Error>();
//! ```
//!
//! And there is nothing past the end:
//!
//! ```compile_fail
//! use kindred::prelude::*;
//!
//! let record = Record::<Seq![u8, char]>::new((1, 'c'));
//! let _ = record.at::<2>();
//! ```

use crate::{
    composite::Composite,
    kind::Kind,
    sequence::{Contains, LengthOf, TypeAt, Unique},
    unary::{LessThan, Number, ToUnary, Unary, UnaryOf},
};

/// What a unit exposes to the accessors.
///
/// Implemented by [`ValueHolder`](crate::holder::ValueHolder) and [`Link`](crate::linear::Link)
/// to unwrap their value; derive it on other units with `#[derive(Slot)]`.
pub trait Slot {
    /// The exposed value.
    type Field;

    /// Borrow the exposed value.
    fn field(&self) -> &Self::Field;

    /// Mutably borrow the exposed value.
    fn field_mut(&mut self) -> &mut Self::Field;
}

/// Access to the unit at position `N`, as generated.
pub trait Located<N: Unary> {
    /// The unit at position `N`.
    type Unit;

    /// Borrow the unit at position `N`.
    fn unit_by_position(&self) -> &Self::Unit;

    /// Mutably borrow the unit at position `N`.
    fn unit_by_position_mut(&mut self) -> &mut Self::Unit;
}

/// Access to the slot at position `N`: the [`Slot`] its unit exposes.
pub trait Positioned<N: Unary> {
    /// The slot's exposed value.
    type Field;

    /// Borrow the slot at position `N`.
    fn by_position(&self) -> &Self::Field;

    /// Mutably borrow the slot at position `N`.
    fn by_position_mut(&mut self) -> &mut Self::Field;
}

impl<C, N> Positioned<N> for C
where
    N: Unary,
    C: Located<N>,
    C::Unit: Slot,
{
    type Field = <C::Unit as Slot>::Field;

    fn by_position(&self) -> &Self::Field {
        Slot::field(Located::<N>::unit_by_position(self))
    }

    fn by_position_mut(&mut self) -> &mut Self::Field {
        Slot::field_mut(Located::<N>::unit_by_position_mut(self))
    }
}

/// Access to the slot of kind `K`, which must occur exactly once.
///
/// Besides occurring once by identity, the slot found must really hold `K`: a different type that
/// shares `K`'s name is not accepted in its place.
pub trait Keyed<K: Kind> {
    /// The slot's exposed value.
    type Field;

    /// Borrow the slot of kind `K`.
    fn by_kind(&self) -> &Self::Field;

    /// Mutably borrow the slot of kind `K`.
    fn by_kind_mut(&mut self) -> &mut Self::Field;
}

impl<C, K> Keyed<K> for C
where
    K: Kind,
    C: Composite + Positioned<<C::Kinds as Contains<K>>::Index>,
    C::Kinds: Unique<K> + TypeAt<<C::Kinds as Contains<K>>::Index, Result = K>,
{
    type Field = <C as Positioned<<C::Kinds as Contains<K>>::Index>>::Field;

    fn by_kind(&self) -> &Self::Field {
        Positioned::<<C::Kinds as Contains<K>>::Index>::by_position(self)
    }

    fn by_kind_mut(&mut self) -> &mut Self::Field {
        Positioned::<<C::Kinds as Contains<K>>::Index>::by_position_mut(self)
    }
}

/// Borrow the slot of kind `K`.
pub fn field_by_kind<K: Kind, C: Keyed<K>>(composite: &C) -> &C::Field {
    Keyed::<K>::by_kind(composite)
}

/// Mutably borrow the slot of kind `K`.
pub fn field_by_kind_mut<K: Kind, C: Keyed<K>>(composite: &mut C) -> &mut C::Field {
    Keyed::<K>::by_kind_mut(composite)
}

/// Borrow the slot at position `I`.
pub fn field_by_position<const I: usize, C>(composite: &C) -> &<C as Positioned<UnaryOf<I>>>::Field
where
    Number<I>: ToUnary,
    C: Positioned<UnaryOf<I>>,
{
    Positioned::<UnaryOf<I>>::by_position(composite)
}

/// Mutably borrow the slot at position `I`.
pub fn field_by_position_mut<const I: usize, C>(
    composite: &mut C,
) -> &mut <C as Positioned<UnaryOf<I>>>::Field
where
    Number<I>: ToUnary,
    C: Positioned<UnaryOf<I>>,
{
    Positioned::<UnaryOf<I>>::by_position_mut(composite)
}

/// Accessor methods on every composite.
pub trait Fields: Composite {
    /// Borrow the slot at position `I`.
    fn at<const I: usize>(&self) -> &<Self as Positioned<UnaryOf<I>>>::Field
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<LengthOf<Self::Kinds>>,
        Self: Positioned<UnaryOf<I>>,
    {
        Positioned::<UnaryOf<I>>::by_position(self)
    }

    /// Mutably borrow the slot at position `I`.
    fn at_mut<const I: usize>(&mut self) -> &mut <Self as Positioned<UnaryOf<I>>>::Field
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<LengthOf<Self::Kinds>>,
        Self: Positioned<UnaryOf<I>>,
    {
        Positioned::<UnaryOf<I>>::by_position_mut(self)
    }

    /// Borrow the unit at position `I`, without projecting it through [`Slot`].
    fn unit_at<const I: usize>(&self) -> &<Self as Located<UnaryOf<I>>>::Unit
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<LengthOf<Self::Kinds>>,
        Self: Located<UnaryOf<I>>,
    {
        Located::<UnaryOf<I>>::unit_by_position(self)
    }

    /// Mutably borrow the unit at position `I`, without projecting it through [`Slot`].
    fn unit_at_mut<const I: usize>(&mut self) -> &mut <Self as Located<UnaryOf<I>>>::Unit
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<LengthOf<Self::Kinds>>,
        Self: Located<UnaryOf<I>>,
    {
        Located::<UnaryOf<I>>::unit_by_position_mut(self)
    }

    /// Borrow the unit of kind `K`, without projecting it through [`Slot`].
    fn unit<K: Kind>(&self) -> &<Self as Located<<Self::Kinds as Contains<K>>::Index>>::Unit
    where
        Self::Kinds: Unique<K> + TypeAt<<Self::Kinds as Contains<K>>::Index, Result = K>,
        Self: Located<<Self::Kinds as Contains<K>>::Index>,
    {
        Located::<<Self::Kinds as Contains<K>>::Index>::unit_by_position(self)
    }

    /// Mutably borrow the unit of kind `K`, without projecting it through [`Slot`].
    fn unit_mut<K: Kind>(
        &mut self,
    ) -> &mut <Self as Located<<Self::Kinds as Contains<K>>::Index>>::Unit
    where
        Self::Kinds: Unique<K> + TypeAt<<Self::Kinds as Contains<K>>::Index, Result = K>,
        Self: Located<<Self::Kinds as Contains<K>>::Index>,
    {
        Located::<<Self::Kinds as Contains<K>>::Index>::unit_by_position_mut(self)
    }

    /// Borrow the slot of kind `K`.
    fn field<K: Kind>(&self) -> &<Self as Keyed<K>>::Field
    where
        Self: Keyed<K>,
    {
        Keyed::<K>::by_kind(self)
    }

    /// Mutably borrow the slot of kind `K`.
    fn field_mut<K: Kind>(&mut self) -> &mut <Self as Keyed<K>>::Field
    where
        Self: Keyed<K>,
    {
        Keyed::<K>::by_kind_mut(self)
    }
}

impl<C: Composite> Fields for C {}
