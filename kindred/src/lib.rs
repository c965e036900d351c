/*!
Type-level **kind-sequences**, and the **composite records** generated from them.

A kind-sequence is an ordered list of types, written [`Seq![A, B, C]`](Seq). This crate gives
you:

- an **algebra** over kind-sequences, computed entirely by the trait solver: length, lookup by
  position and by kind, append, erase, deduplicate, replace and reverse (see [`sequence`]);
- **composite generators**, which turn a kind-sequence and a *unit generator* (a mapping from each
  kind to a type) into a single aggregate holding one unit per kind, either side by side
  ([`Scatter`](composite::Scatter)) or each wrapping the next ([`Linear`](linear::Linear));
- a **tuple adapter**, [`Record`](holder::Record), which holds one plain value per kind;
- **field access** by position or by kind, resolved at compile time with no runtime cost
  (see [`field`]).

```
use kindred::prelude::*;

#[derive(Debug, Default, PartialEq, Kind)]
struct Celsius(f64);

#[derive(Debug, Default, PartialEq, Kind)]
struct Label(&'static str);

let mut reading = Record::<Seq![Label, Celsius]>::new((Label("oven"), Celsius(180.0)));
reading.field_mut::<Celsius>().0 += 20.0;

assert_eq!(reading.at::<0>(), &Label("oven"));
assert_eq!(reading.field::<Celsius>(), &Celsius(200.0));
```

Everything that can go wrong goes wrong at compile time: looking up a position past the end of a
sequence, or looking up by kind a kind that occurs zero or several times, is a type error. See the
[`tutorial`] for a longer walkthrough.
*/
#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

// Generated code names this crate `::kindred`, from inside it as well as from outside.
extern crate self as kindred;

pub mod composite;
pub mod field;
pub mod holder;
pub mod kind;
pub mod linear;
pub mod logic;
pub mod sequence;
pub mod tuple;
pub mod tutorial;
pub mod unary;

pub use kindred_macro::{Kind, Slot};

/// The prelude module for quickly getting started with kindred.
///
/// This module is designed to be imported as `use kindred::prelude::*;`, which brings into scope
/// the traits behind every accessor, the common composite types, the derive macros and
/// [`Seq!`](crate::Seq).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::composite::{Composite, Empty, Generator, Pair, Rebind, Scatter};
    #[doc(no_inline)]
    pub use crate::field::{Fields, Keyed, Located, Positioned, Slot};
    #[doc(no_inline)]
    pub use crate::holder::{Holder, Record, ValueHolder};
    #[doc(no_inline)]
    pub use crate::kind::{Kind, SameKind};
    #[doc(no_inline)]
    pub use crate::linear::{Chained, Linear, LinearGenerator, LinearRecord, Link, Links};
    #[doc(no_inline)]
    pub use crate::sequence::{
        Append, Contains, Erase, EraseAll, IndexOf, NoDuplicates, Occurrences, Replace,
        ReplaceAll, Reverse, Sequence, TypeAt, Unique,
    };
    #[doc(no_inline)]
    pub use crate::tuple::{List, Tuple};
    #[doc(no_inline)]
    pub use crate::Seq;
    #[doc(no_inline)]
    pub use kindred_macro::{Kind, Slot};
}
