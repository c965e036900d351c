use kindred::linear::Chained;
use kindred::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

#[derive(Debug, Default, PartialEq, Slot)]
struct Whole {
    count: u32,
}

#[derive(Debug, Default, PartialEq, Slot)]
struct Wrapping<T, Next>(T, #[slot(next)] Next);

#[derive(Debug, Default, PartialEq, Slot)]
struct Named<'a, Next> {
    label: &'a str,
    #[slot(next)]
    rest: Next,
}

#[derive(Debug, PartialEq, Slot)]
enum Either {
    Left(u8),
    Right(char),
}

#[test]
fn slots_expose_themselves() {
    assert_type_eq_all!(<Whole as Slot>::Field, Whole);
    assert_type_eq_all!(<Either as Slot>::Field, Either);
    assert_not_impl_any!(Whole: Chained);
    assert_not_impl_any!(Either: Chained);

    let mut whole = Whole::default();
    whole.field_mut().count = 3;
    assert_eq!(whole.field(), &Whole { count: 3 });
    assert_eq!(Either::Right('r').field(), &Either::Right('r'));
    assert_ne!(Either::Left(1).field(), &Either::Right('r'));
}

#[test]
fn next_marker_chains() {
    assert_impl_all!(Wrapping<u8, Empty>: Slot, Chained);
    assert_type_eq_all!(<Wrapping<u8, Whole> as Chained>::Next, Whole);

    let mut unit = Wrapping(1u8, Whole::default());
    unit.next_mut().count = 9;
    assert_eq!(unit.next(), &Whole { count: 9 });

    let named = Named {
        label: "outer",
        rest: Named {
            label: "inner",
            rest: Empty,
        },
    };
    assert_eq!(named.next().label, "inner");
    assert_eq!(named.field().label, "outer");
}
