//! The tuple adapter: a unit holding one plain value per kind.
//!
//! [`Holder`] generates a [`ValueHolder<K>`] for each kind `K`, so a [`Record`] over
//! `Seq![A, B, C]` stores one `A`, one `B` and one `C`, much like the tuple `(A, B, C)`. The
//! accessors see through the holder to the value it holds.
//!
//! ```
//! use kindred::prelude::*;
//!
//! let record = Record::<Seq![u8, String, f64]>::new((1, "two".to_owned(), 3.0));
//! assert_eq!(record.field::<String>(), "two");
//! assert_eq!(record.into_values(), (1, "two".to_owned(), 3.0));
//! ```

use std::ops::{Deref, DerefMut};

use crate::{
    composite::{Composite, Empty, Generate, Generator, Pair, Scatter},
    field::Slot,
    tuple::{List, Tuple},
};

/// A unit holding a single value.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ValueHolder<T> {
    /// The held value.
    pub value: T,
}

impl<T> ValueHolder<T> {
    /// Hold a value.
    pub fn new(value: T) -> Self {
        ValueHolder { value }
    }

    /// Give back the held value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for ValueHolder<T> {
    fn from(value: T) -> Self {
        ValueHolder::new(value)
    }
}

impl<T> Deref for ValueHolder<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for ValueHolder<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> AsRef<T> for ValueHolder<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> AsMut<T> for ValueHolder<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> Slot for ValueHolder<T> {
    type Field = T;

    fn field(&self) -> &T {
        &self.value
    }

    fn field_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// The unit generator of [`ValueHolder`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Holder;

impl<K> Generator<K> for Holder {
    type Unit = ValueHolder<K>;
}

/// The tuple composite: one [`ValueHolder`] per kind.
pub type Record<Kinds> = Scatter<Kinds, Holder>;

/// A list of values, one for each kind of the sequence it is, that can be moved in and out of
/// [`ValueHolder`] shapes.
pub trait Values: Generate<Holder> {
    /// Put each value in its holder.
    fn into_holders(self) -> Self::Shape;

    /// Take each value out of its holder.
    fn from_holders(shape: Self::Shape) -> Self;
}

impl Values for () {
    fn into_holders(self) -> Empty {
        Empty
    }

    fn from_holders(_: Empty) -> Self {}
}

impl<H> Values for (H, ()) {
    fn into_holders(self) -> ValueHolder<H> {
        ValueHolder::new(self.0)
    }

    fn from_holders(shape: ValueHolder<H>) -> Self {
        (shape.into_inner(), ())
    }
}

impl<H, H2, T> Values for (H, (H2, T))
where
    (H2, T): Values,
{
    fn into_holders(self) -> Self::Shape {
        let (head, rest) = self;
        Pair {
            left: ValueHolder::new(head),
            right: rest.into_holders(),
        }
    }

    fn from_holders(shape: Self::Shape) -> Self {
        (shape.left.into_inner(), <(H2, T)>::from_holders(shape.right))
    }
}

impl<Kinds: Values> Scatter<Kinds, Holder> {
    /// Build a record from the flat tuple of its values.
    pub fn new(values: Kinds::AsTuple) -> Self
    where
        Kinds: List,
    {
        Self::from_list(values.into_list())
    }

    /// Build a record from the inductive list of its values.
    pub fn from_list(values: Kinds) -> Self {
        Self::from_shape(values.into_holders())
    }

    /// Take the values back out, as an inductive list.
    pub fn into_list(self) -> Kinds {
        Kinds::from_holders(self.into_shape())
    }

    /// Take the values back out, as a flat tuple.
    pub fn into_values(self) -> Kinds::AsTuple
    where
        Kinds: List,
    {
        self.into_list().into_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seq;
    use static_assertions::assert_type_eq_all;

    #[test]
    fn holder_unwraps() {
        let mut held = ValueHolder::from(3u8);
        *held += 1;
        assert_eq!(*held.field(), 4);
        assert_eq!(held.as_ref(), &4);
        assert_eq!(held.into_inner(), 4);
    }

    #[test]
    fn record_shapes() {
        assert_type_eq_all!(
            <Seq![u8, char] as Generate<Holder>>::Shape,
            Pair<ValueHolder<u8>, ValueHolder<char>>
        );
        let record = Record::<Seq![u8, char]>::new((1, 'a'));
        assert_eq!(
            record.shape(),
            &Pair {
                left: ValueHolder::new(1),
                right: ValueHolder::new('a'),
            }
        );
    }

    #[test]
    fn single_and_empty_records() {
        let single = Record::<Seq![String]>::new(("only".to_owned(),));
        assert_eq!(single.shape().value, "only");
        assert_eq!(single.into_values(), ("only".to_owned(),));

        let empty = Record::<Seq![]>::new(());
        assert_eq!(empty.into_list(), ());
    }
}
