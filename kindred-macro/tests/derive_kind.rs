#![allow(dead_code)]

use kindred::logic::{False, True};
use kindred::prelude::*;
use static_assertions::{assert_impl_all, assert_type_eq_all};

#[derive(Kind)]
struct Unit;

#[derive(Kind)]
struct Named {
    field: u8,
}

#[derive(Kind)]
enum Choice {
    Left,
    Right,
}

#[derive(Kind)]
struct Pairing<L, R>(L, R);

#[derive(Kind)]
struct Bounded<T: Clone>(T)
where
    T: Default;

mod elsewhere {
    #[derive(kindred::Kind)]
    pub struct Unit;

    #[derive(kindred::Kind)]
    #[kind(name = "elsewhere::Unit")]
    pub struct Renamed;
}

#[test]
fn every_item_shape_derives() {
    assert_impl_all!(Unit: Kind);
    assert_impl_all!(Named: Kind);
    assert_impl_all!(Choice: Kind);
    assert_impl_all!(Pairing<u8, char>: Kind);
    assert_impl_all!(Bounded<u8>: Kind);
}

#[test]
fn same_name_same_kind() {
    assert_type_eq_all!(<Unit as SameKind<elsewhere::Unit>>::Result, True);
    assert_type_eq_all!(<Unit as SameKind<elsewhere::Renamed>>::Result, False);
    assert_type_eq_all!(<Unit as SameKind<Named>>::Result, False);
}

#[test]
fn parameters_are_part_of_the_identity() {
    assert_type_eq_all!(<Pairing<u8, char> as SameKind<Pairing<u8, char>>>::Result, True);
    assert_type_eq_all!(<Pairing<u8, char> as SameKind<Pairing<char, u8>>>::Result, False);
    assert_eq!(
        <Seq![Pairing<Unit, Named>, Pairing<Named, Unit>] as IndexOf<Pairing<Named, Unit>>>::VALUE,
        1
    );
}
