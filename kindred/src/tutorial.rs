/*! The introductory tutorial for kindred (nothing is exported from this module).

# Getting started with kindred

A *kind* is a type used as a label. Any type can be made a kind by deriving
[`Kind`](trait@crate::kind::Kind):

```
use kindred::prelude::*;

#[derive(Kind)]
struct Width;

#[derive(Kind)]
struct Height;
```

Primitive types, `String` and `&'static str` are kinds already.

A *kind-sequence* is an ordered list of kinds. The [`Seq!`](crate::Seq) macro writes one:

```
# use kindred::prelude::*;
# use static_assertions::assert_type_eq_all;
# #[derive(Kind)] struct Width;
# #[derive(Kind)] struct Height;
type Dimensions = Seq![Width, Height];

assert_type_eq_all!(Dimensions, (Width, (Height, ())));
```

Under the hood it's an inductive list: `()` is the empty sequence, and `(H, T)` puts `H` in front
of the sequence `T`. (Here and elsewhere in this tutorial, we use the
[`assert_type_eq_all!`](https://docs.rs/static_assertions/1/static_assertions/macro.assert_type_eq_all.html)
macro from the [`static_assertions`](https://docs.rs/static_assertions) crate to assert that Rust sees these types as equal.)

# Computing with sequences

The [`sequence`](crate::sequence) module defines an algebra over kind-sequences. Each operation
is a trait with a `Result` type, plus a type alias for convenience:

```
# use kindred::prelude::*;
use kindred::sequence::{Appended, Deduplicated, Erased, Reversed};
# use static_assertions::assert_type_eq_all;
# #[derive(Kind)] struct Width;
# #[derive(Kind)] struct Height;
#[derive(Kind)]
struct Depth;

type Dimensions = Seq![Width, Height];
type Volume = Appended<Dimensions, Depth>;

assert_type_eq_all!(Volume, Seq![Width, Height, Depth]);
assert_type_eq_all!(Reversed<Volume>, Seq![Depth, Height, Width]);
assert_type_eq_all!(Erased<Volume, Height>, Seq![Width, Depth]);
assert_type_eq_all!(Deduplicated<Seq![Width, Width, Depth]>, Seq![Width, Depth]);
```

Some questions have numbers for answers. Looking for a kind gives its first position, or `-1`:

```
# use kindred::prelude::*;
# #[derive(Kind)] struct Width;
# #[derive(Kind)] struct Height;
# #[derive(Kind)] struct Depth;
assert_eq!(<Seq![Width, Height] as IndexOf<Height>>::VALUE, 1);
assert_eq!(<Seq![Width, Height] as IndexOf<Depth>>::VALUE, -1);
assert_eq!(<Seq![Width, Height] as Sequence>::LENGTH, 2);
```

# Records

A sequence of kinds can describe a record holding a value of each kind. [`Record`] is the
simplest of these, a tuple that can be indexed by kind as well as by position:

```
# use kindred::prelude::*;
#[derive(Debug, PartialEq, Kind)]
struct Name(&'static str);

#[derive(Debug, PartialEq, Kind)]
struct Age(u32);

let mut person = Record::<Seq![Name, Age]>::new((Name("Ada"), Age(36)));

person.field_mut::<Age>().0 += 1;
assert_eq!(person.field::<Age>(), &Age(37));
assert_eq!(person.at::<0>(), &Name("Ada"));
```

A kind that occurs more than once can only be reached by position:

```
# use kindred::prelude::*;
let mut pair = Record::<Seq![u32, u32]>::new((1, 2));
*pair.at_mut::<1>() *= 10;
assert_eq!(pair.into_values(), (1, 20));
```

Asking for it by kind is a compile-time error, and so is a position past the end:

```compile_fail
# use kindred::prelude::*;
let pair = Record::<Seq![u32, u32]>::new((1, 2));
let _ = pair.field::<u32>();
```

# Generating your own composites

`Record` is a [`Scatter`] composite whose [`Generator`] is [`Holder`], which wraps every kind in
a [`ValueHolder`]. Any generator can take its place. Here, every kind gets a list of
observations:

```
# use kindred::prelude::*;
#[derive(Debug, Default, Slot)]
struct Observations<K> {
    seen: Vec<K>,
}

struct Observe;

impl<K> Generator<K> for Observe {
    type Unit = Observations<K>;
}

let mut log = Scatter::<Seq![u8, char], Observe>::default();
log.field_mut::<char>().seen.push('a');
log.at_mut::<0>().seen.extend([1, 2]);

assert_eq!(log.field::<u8>().seen, vec![1, 2]);
```

Units that aren't [`ValueHolder`]s expose themselves to the accessors, which is what
`#[derive(Slot)]` implements.

# Linear composites

A [`Linear`] composite nests its units instead, each one wrapping the next and the last wrapping a
root. A [`LinearGenerator`] receives the shape it wraps as a second parameter:

```
# use kindred::prelude::*;
#[derive(Debug, Default, Slot)]
struct Layer<K, Inner> {
    value: K,
    #[slot(next)]
    inner: Inner,
}

struct Layers;

impl<K, Inner> LinearGenerator<K, Inner> for Layers {
    type Unit = Layer<K, Inner>;
}

let mut onion = Linear::<Seq![u8, char], Layers>::default();
onion.at_mut::<1>().value = 'c';

assert_eq!(onion.shape().inner.value, 'c');
assert_eq!(onion.shape().inner.inner, Empty);
```

The `#[slot(next)]` attribute marks the field holding the rest of the chain, implementing
[`Chained`] so positional access can walk it. [`LinearRecord`] is the ready-made linear
counterpart of `Record`.
*/

#[allow(unused_imports)] // For documentation linking
use crate::prelude::*;
