//! Scatter composites: one unit per kind of a sequence, held side by side.
//!
//! A [`Generator`] maps each kind to a *unit* type. [`Generate`] folds a sequence into a *shape*
//! holding one unit per element:
//!
//! - `Seq![]` becomes [`Empty`];
//! - `Seq![A]` becomes the unit for `A` itself;
//! - `Seq![A, B, ...]` becomes a [`Pair`] of the unit for `A` and the shape of `Seq![B, ...]`.
//!
//! [`Scatter`] wraps a shape, remembering the sequence and generator it came from so that its
//! slots can be found again by position or by kind.
//!
//! ```
//! use kindred::prelude::*;
//! use kindred::composite::ShapeOf;
//! use static_assertions::assert_type_eq_all;
//!
//! struct Boxed;
//!
//! impl<K> Generator<K> for Boxed {
//!     type Unit = Box<K>;
//! }
//!
//! assert_type_eq_all!(ShapeOf<Seq![], Boxed>, Empty);
//! assert_type_eq_all!(ShapeOf<Seq![u8], Boxed>, Box<u8>);
//! assert_type_eq_all!(
//!     ShapeOf<Seq![u8, char, bool], Boxed>,
//!     Pair<Box<u8>, Pair<Box<char>, Box<bool>>>,
//! );
//! ```

use std::{fmt, hash, marker::PhantomData};

use crate::{
    field::Located,
    kind::Kind,
    sequence::{Contains, Sequence},
    unary::{Unary, S, Z},
};

/// A unit generator: maps a kind `K` to the unit holding it.
pub trait Generator<K> {
    /// The unit for `K`.
    type Unit;
}

/// The unit `G` generates for `K`.
pub type UnitOf<G, K> = <G as Generator<K>>::Unit;

/// The shape of the empty sequence: a unit holding nothing.
///
/// All `Empty`s are equal, and default-construct trivially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Empty;

/// Two sibling parts of a scatter shape: the unit for the first kind, and the shape of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<L, R> {
    /// The unit for the first kind.
    pub left: L,
    /// The shape of the remaining kinds.
    pub right: R,
}

/// Fold a sequence into the scatter shape generated by `G`.
pub trait Generate<G>: Sequence {
    /// One unit per element.
    type Shape;
}

impl<G> Generate<G> for () {
    type Shape = Empty;
}

impl<G: Generator<H>, H> Generate<G> for (H, ()) {
    type Shape = G::Unit;
}

impl<G: Generator<H>, H, H2, T> Generate<G> for (H, (H2, T))
where
    (H2, T): Generate<G>,
{
    type Shape = Pair<G::Unit, <(H2, T) as Generate<G>>::Shape>;
}

/// The scatter shape of `Kinds` generated by `G`.
pub type ShapeOf<Kinds, G> = <Kinds as Generate<G>>::Shape;

/// Find the unit at position `N` inside a shape of `Self`.
///
/// The walk descends into [`Pair::left`] at position zero, and otherwise into [`Pair::right`] one
/// position earlier, until it lands on a single unit.
#[diagnostic::on_unimplemented(
    message = "position exceeds sequence length",
    label = "`{Self}` has no element at position `{N}`"
)]
pub trait Locate<G, N: Unary>: Generate<G> {
    /// The unit at position `N`.
    type Unit;

    /// Borrow the unit at position `N`.
    fn locate(shape: &Self::Shape) -> &Self::Unit;

    /// Mutably borrow the unit at position `N`.
    fn locate_mut(shape: &mut Self::Shape) -> &mut Self::Unit;
}

impl<G: Generator<H>, H> Locate<G, Z> for (H, ()) {
    type Unit = G::Unit;

    fn locate(shape: &G::Unit) -> &G::Unit {
        shape
    }

    fn locate_mut(shape: &mut G::Unit) -> &mut G::Unit {
        shape
    }
}

impl<G: Generator<H>, H, H2, T> Locate<G, Z> for (H, (H2, T))
where
    (H2, T): Generate<G>,
{
    type Unit = G::Unit;

    fn locate(shape: &Self::Shape) -> &G::Unit {
        &shape.left
    }

    fn locate_mut(shape: &mut Self::Shape) -> &mut G::Unit {
        &mut shape.left
    }
}

impl<G: Generator<H>, H, H2, T, N: Unary> Locate<G, S<N>> for (H, (H2, T))
where
    (H2, T): Locate<G, N>,
{
    type Unit = <(H2, T) as Locate<G, N>>::Unit;

    fn locate(shape: &Self::Shape) -> &Self::Unit {
        <(H2, T)>::locate(&shape.right)
    }

    fn locate_mut(shape: &mut Self::Shape) -> &mut Self::Unit {
        <(H2, T)>::locate_mut(&mut shape.right)
    }
}

/// A composite value: a shape generated from a kind-sequence, which accessors can look into.
///
/// Implemented by [`Scatter`] and [`Linear`](crate::linear::Linear), so generic code can accept
/// either.
pub trait Composite: Sized {
    /// The sequence the shape was generated from.
    type Kinds: Sequence;

    /// The generated shape.
    type Shape;

    /// Wrap a shape.
    fn from_shape(shape: Self::Shape) -> Self;

    /// Borrow the shape.
    fn shape(&self) -> &Self::Shape;

    /// Mutably borrow the shape.
    fn shape_mut(&mut self) -> &mut Self::Shape;

    /// Unwrap the shape.
    fn into_shape(self) -> Self::Shape;
}

/// A scatter composite: the shape `Kinds` generates under `G`, with its slots addressable by
/// position and by kind.
///
/// ```
/// use kindred::prelude::*;
///
/// let mut record = Record::<Seq![u8, String, f64]>::new((1, "two".to_owned(), 3.0));
/// *record.at_mut::<1>() = "deux".to_owned();
/// assert_eq!(record.field::<String>(), "deux");
/// assert_eq!(*record.at::<0>(), 1);
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "<Kinds as Generate<G>>::Shape: fmt::Debug"),
    Clone(bound = "<Kinds as Generate<G>>::Shape: Clone"),
    Copy(bound = "<Kinds as Generate<G>>::Shape: Copy"),
    PartialEq(bound = "<Kinds as Generate<G>>::Shape: PartialEq"),
    Eq(bound = "<Kinds as Generate<G>>::Shape: Eq"),
    PartialOrd(bound = "<Kinds as Generate<G>>::Shape: PartialOrd"),
    Ord(bound = "<Kinds as Generate<G>>::Shape: Ord"),
    Hash(bound = "<Kinds as Generate<G>>::Shape: hash::Hash"),
    Default(bound = "<Kinds as Generate<G>>::Shape: Default")
)]
pub struct Scatter<Kinds: Generate<G>, G> {
    shape: Kinds::Shape,
    #[derivative(Debug = "ignore")]
    generator: PhantomData<fn() -> (Kinds, G)>,
}

impl<Kinds: Generate<G>, G> Composite for Scatter<Kinds, G> {
    type Kinds = Kinds;
    type Shape = Kinds::Shape;

    fn from_shape(shape: Kinds::Shape) -> Self {
        Scatter {
            shape,
            generator: PhantomData,
        }
    }

    fn shape(&self) -> &Kinds::Shape {
        &self.shape
    }

    fn shape_mut(&mut self) -> &mut Kinds::Shape {
        &mut self.shape
    }

    fn into_shape(self) -> Kinds::Shape {
        self.shape
    }
}

impl<Kinds, G, N: Unary> Located<N> for Scatter<Kinds, G>
where
    Kinds: Locate<G, N>,
{
    type Unit = <Kinds as Locate<G, N>>::Unit;

    fn unit_by_position(&self) -> &Self::Unit {
        Kinds::locate(&self.shape)
    }

    fn unit_by_position_mut(&mut self) -> &mut Self::Unit {
        Kinds::locate_mut(&mut self.shape)
    }
}

/// The unit a composite's generator makes for `K`, defined only when `K` is one of its kinds.
///
/// ```
/// use kindred::prelude::*;
/// use kindred::composite::Rebound;
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(Rebound<Record<Seq![u8, char]>, char>, ValueHolder<char>);
/// ```
///
/// ```compile_fail
/// use kindred::prelude::*;
/// use kindred::composite::Rebound;
///
/// let _: Option<Rebound<Record<Seq![u8, char]>, bool>> = None;
/// ```
pub trait Rebind<K: Kind> {
    /// The generated unit for `K`.
    type Unit;
}

impl<Kinds, G, K> Rebind<K> for Scatter<Kinds, G>
where
    K: Kind,
    Kinds: Generate<G> + Contains<K>,
    G: Generator<K>,
{
    type Unit = G::Unit;
}

/// The unit `C` generates for `K`.
pub type Rebound<C, K> = <C as Rebind<K>>::Unit;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{holder::Holder, Seq};
    use static_assertions::assert_type_eq_all;

    struct Listed;

    impl<K> Generator<K> for Listed {
        type Unit = Vec<K>;
    }

    #[test]
    fn shapes() {
        assert_type_eq_all!(ShapeOf<Seq![], Listed>, Empty);
        assert_type_eq_all!(ShapeOf<Seq![u8], Listed>, Vec<u8>);
        assert_type_eq_all!(
            ShapeOf<Seq![u8, u8, char], Listed>,
            Pair<Vec<u8>, Pair<Vec<u8>, Vec<char>>>
        );
    }

    #[test]
    fn locate_walks_left_then_right() {
        type Kinds = Seq![u8, u16, u32];
        let mut shape: ShapeOf<Kinds, Listed> = Pair {
            left: vec![1],
            right: Pair {
                left: vec![2],
                right: vec![3],
            },
        };
        assert_eq!(<Kinds as Locate<Listed, Z>>::locate(&shape), &vec![1u8]);
        assert_eq!(<Kinds as Locate<Listed, S<Z>>>::locate(&shape), &vec![2u16]);
        <Kinds as Locate<Listed, S<S<Z>>>>::locate_mut(&mut shape).push(4);
        assert_eq!(shape.right.right, vec![3u32, 4]);
    }

    #[test]
    fn units_without_slots_are_located() {
        use crate::field::Fields;

        let mut lists = Scatter::<Seq![u8, char], Listed>::default();
        lists.unit_at_mut::<0>().push(1);
        lists.unit_mut::<char>().push('z');
        assert_eq!(lists.shape().left, vec![1]);
        assert_eq!(lists.unit_at::<1>(), &vec!['z']);
    }

    #[test]
    fn empty_is_a_genuine_unit() {
        let record: Scatter<Seq![], Holder> = Default::default();
        assert_eq!(record, Scatter::from_shape(Empty));
        assert_eq!(record.partial_cmp(&record), Some(std::cmp::Ordering::Equal));
        assert_eq!(format!("{:?}", record), "Scatter { shape: Empty }");
    }
}
