//! Linear composites: one unit per kind, each wrapping the next, ending at a root.
//!
//! A [`LinearGenerator`] maps a kind and the shape it wraps (its *base*) to a unit.
//! [`GenerateLinear`] folds a sequence from the back: the empty sequence is the `Root`, and
//! `(T, Rest)` is the unit for `T` wrapping the shape of `Rest`. Units expose their single
//! successor through [`Chained`], which is how positional access walks the chain.
//!
//! ```
//! use kindred::prelude::*;
//! use kindred::linear::LinearShapeOf;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(LinearShapeOf<Seq![], Links, Empty>, Empty);
//! assert_type_eq_all!(
//!     LinearShapeOf<Seq![u8, char], Links, Empty>,
//!     Link<u8, Link<char, Empty>>,
//! );
//!
//! let chain = LinearRecord::<Seq![u8, char]>::new((1, 'c'), Empty);
//! assert_eq!(*chain.at::<1>(), 'c');
//! ```

use std::{fmt, hash, marker::PhantomData};

use crate::{
    composite::{Composite, Empty},
    field::{Located, Slot},
    sequence::{LengthOf, Sequence},
    tuple::{List, Tuple},
    unary::{LessThan, Unary, S, Z},
};

/// A linear unit generator: maps a kind `K` wrapping the shape `Base` to a unit.
pub trait LinearGenerator<K, Base> {
    /// The unit for `K`.
    type Unit;
}

/// Fold a sequence into the linear shape generated by `G`, ending at `Root`.
pub trait GenerateLinear<G, Root>: Sequence {
    /// The outermost unit, or `Root` for the empty sequence.
    type Shape;
}

impl<G, Root> GenerateLinear<G, Root> for () {
    type Shape = Root;
}

impl<G, Root, H, T> GenerateLinear<G, Root> for (H, T)
where
    T: GenerateLinear<G, Root>,
    G: LinearGenerator<H, T::Shape>,
{
    type Shape = G::Unit;
}

/// The linear shape of `Kinds` generated by `G`, ending at `Root`.
pub type LinearShapeOf<Kinds, G, Root> = <Kinds as GenerateLinear<G, Root>>::Shape;

/// A unit of a linear chain, exposing the shape it wraps.
pub trait Chained {
    /// The wrapped shape.
    type Next;

    /// Borrow the wrapped shape.
    fn next(&self) -> &Self::Next;

    /// Mutably borrow the wrapped shape.
    fn next_mut(&mut self) -> &mut Self::Next;
}

/// Step `N` units into a linear shape, following [`Chained::next`].
///
/// Every shape is zero steps from itself; a [`Chained`] unit is `N + 1` steps from whatever is `N`
/// steps from its successor.
pub trait Step<N: Unary> {
    /// The unit `N` steps in.
    type Unit;

    /// Borrow the unit `N` steps in.
    fn step(&self) -> &Self::Unit;

    /// Mutably borrow the unit `N` steps in.
    fn step_mut(&mut self) -> &mut Self::Unit;
}

impl<U> Step<Z> for U {
    type Unit = U;

    fn step(&self) -> &U {
        self
    }

    fn step_mut(&mut self) -> &mut U {
        self
    }
}

impl<U, N> Step<S<N>> for U
where
    N: Unary,
    U: Chained,
    U::Next: Step<N>,
{
    type Unit = <U::Next as Step<N>>::Unit;

    fn step(&self) -> &Self::Unit {
        <U::Next as Step<N>>::step(self.next())
    }

    fn step_mut(&mut self) -> &mut Self::Unit {
        <U::Next as Step<N>>::step_mut(self.next_mut())
    }
}

/// A linear composite: the chain `Kinds` generates under `G`, ending at `Root`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: fmt::Debug"),
    Clone(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: Clone"),
    Copy(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: Copy"),
    PartialEq(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: PartialEq"),
    Eq(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: Eq"),
    PartialOrd(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: PartialOrd"),
    Ord(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: Ord"),
    Hash(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: hash::Hash"),
    Default(bound = "<Kinds as GenerateLinear<G, Root>>::Shape: Default")
)]
pub struct Linear<Kinds: GenerateLinear<G, Root>, G, Root = Empty> {
    shape: Kinds::Shape,
    #[derivative(Debug = "ignore")]
    generator: PhantomData<fn() -> (Kinds, G, Root)>,
}

impl<Kinds: GenerateLinear<G, Root>, G, Root> Composite for Linear<Kinds, G, Root> {
    type Kinds = Kinds;
    type Shape = Kinds::Shape;

    fn from_shape(shape: Kinds::Shape) -> Self {
        Linear {
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

impl<Kinds, G, Root, N> Located<N> for Linear<Kinds, G, Root>
where
    Kinds: GenerateLinear<G, Root>,
    N: Unary + LessThan<LengthOf<Kinds>>,
    <Kinds as GenerateLinear<G, Root>>::Shape: Step<N>,
{
    type Unit = <<Kinds as GenerateLinear<G, Root>>::Shape as Step<N>>::Unit;

    fn unit_by_position(&self) -> &Self::Unit {
        Step::<N>::step(&self.shape)
    }

    fn unit_by_position_mut(&mut self) -> &mut Self::Unit {
        Step::<N>::step_mut(&mut self.shape)
    }
}

/// A linear unit storing a value and the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Link<K, Next> {
    /// The stored value.
    pub value: K,
    /// The rest of the chain.
    pub next: Next,
}

impl<K, Next> Slot for Link<K, Next> {
    type Field = K;

    fn field(&self) -> &K {
        &self.value
    }

    fn field_mut(&mut self) -> &mut K {
        &mut self.value
    }
}

impl<K, Next> Chained for Link<K, Next> {
    type Next = Next;

    fn next(&self) -> &Next {
        &self.next
    }

    fn next_mut(&mut self) -> &mut Next {
        &mut self.next
    }
}

/// The linear unit generator of [`Link`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Links;

impl<K, Base> LinearGenerator<K, Base> for Links {
    type Unit = Link<K, Base>;
}

/// The linear counterpart of [`Record`](crate::holder::Record): one [`Link`] per kind.
pub type LinearRecord<Kinds, Root = Empty> = Linear<Kinds, Links, Root>;

/// A list of values, one for each kind of the sequence it is, that can be threaded into and out
/// of a chain of [`Link`]s.
pub trait LinearValues<Root>: GenerateLinear<Links, Root> + Sized {
    /// Thread the values into a chain ending at `root`.
    fn into_chain(self, root: Root) -> Self::Shape;

    /// Take the values and the root back out of a chain.
    fn from_chain(chain: Self::Shape) -> (Self, Root);

    /// Borrow the root at the end of a chain.
    fn root_of(chain: &Self::Shape) -> &Root;
}

impl<Root> LinearValues<Root> for () {
    fn into_chain(self, root: Root) -> Root {
        root
    }

    fn from_chain(root: Root) -> (Self, Root) {
        ((), root)
    }

    fn root_of(root: &Root) -> &Root {
        root
    }
}

impl<Root, H, T: LinearValues<Root>> LinearValues<Root> for (H, T) {
    fn into_chain(self, root: Root) -> Link<H, T::Shape> {
        let (value, rest) = self;
        Link {
            value,
            next: rest.into_chain(root),
        }
    }

    fn from_chain(chain: Link<H, T::Shape>) -> (Self, Root) {
        let (rest, root) = T::from_chain(chain.next);
        ((chain.value, rest), root)
    }

    fn root_of(chain: &Link<H, T::Shape>) -> &Root {
        T::root_of(&chain.next)
    }
}

impl<Kinds: LinearValues<Root>, Root> Linear<Kinds, Links, Root> {
    /// Build a chain from the flat tuple of its values and its root.
    pub fn new(values: Kinds::AsTuple, root: Root) -> Self
    where
        Kinds: List,
    {
        Self::from_list(values.into_list(), root)
    }

    /// Build a chain from the inductive list of its values and its root.
    pub fn from_list(values: Kinds, root: Root) -> Self {
        Self::from_shape(values.into_chain(root))
    }

    /// Take the values, as an inductive list, and the root back out.
    pub fn into_list(self) -> (Kinds, Root) {
        Kinds::from_chain(self.into_shape())
    }

    /// Take the values, as a flat tuple, and the root back out.
    pub fn into_parts(self) -> (Kinds::AsTuple, Root)
    where
        Kinds: List,
    {
        let (values, root) = self.into_list();
        (values.into_tuple(), root)
    }

    /// Borrow the root at the end of the chain.
    pub fn root(&self) -> &Root {
        Kinds::root_of(&self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seq;
    use static_assertions::assert_type_eq_all;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Base(&'static str);

    #[test]
    fn empty_sequence_is_the_root() {
        assert_type_eq_all!(LinearShapeOf<Seq![], Links, Base>, Base);
        let chain = LinearRecord::<Seq![], Base>::new((), Base("root"));
        assert_eq!(chain.shape(), &Base("root"));
        assert_eq!(chain.root(), &Base("root"));
    }

    #[test]
    fn steps_follow_next() {
        type Kinds = Seq![u8, u16, u32];
        let mut chain = LinearRecord::<Kinds, Base>::new((1, 2, 3), Base("root"));
        assert_eq!(Step::<S<Z>>::step(chain.shape()).value, 2);
        Step::<S<S<Z>>>::step_mut(chain.shape_mut()).value = 30;
        assert_eq!(chain.root(), &Base("root"));
        assert_eq!(chain.into_parts(), ((1, 2, 30), Base("root")));
    }
}
