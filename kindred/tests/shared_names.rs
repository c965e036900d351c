use kindred::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any};

mod network {
    #[derive(Debug, PartialEq, kindred::Kind)]
    pub struct Error(pub &'static str);
}

mod storage {
    #[derive(Debug, PartialEq, kindred::Kind)]
    pub struct Error(pub &'static str);
}

mod renamed {
    #[derive(Debug, PartialEq, kindred::Kind)]
    #[kind(name = "renamed::Error")]
    pub struct Error(pub &'static str);
}

#[test]
fn keyed_access_checks_the_slot_type() {
    assert_impl_all!(Record<Seq![storage::Error, u8]>: Keyed<storage::Error>, Keyed<u8>);
    assert_not_impl_any!(Record<Seq![storage::Error, u8]>: Keyed<network::Error>);

    let record = Record::<Seq![storage::Error, u8]>::new((storage::Error("disk"), 1));
    assert_eq!(record.field::<storage::Error>(), &storage::Error("disk"));
}

#[test]
fn identities_follow_names() {
    // Same name, same identity.
    assert_eq!(<Seq![storage::Error, u8] as IndexOf<network::Error>>::VALUE, 0);

    // A distinct name keeps the algebra exact.
    assert_eq!(<Seq![storage::Error, u8] as IndexOf<renamed::Error>>::VALUE, -1);
    assert_eq!(<Seq![storage::Error, renamed::Error] as IndexOf<renamed::Error>>::VALUE, 1);
    assert_not_impl_any!(Seq![storage::Error, u8]: Contains<renamed::Error>);
}

#[test]
fn renamed_kinds_are_separate_slots() {
    let mut record = Record::<Seq![storage::Error, renamed::Error]>::new((
        storage::Error("disk"),
        renamed::Error("other"),
    ));
    record.field_mut::<renamed::Error>().0 = "changed";
    assert_eq!(record.at::<0>(), &storage::Error("disk"));
    assert_eq!(record.field::<renamed::Error>(), &renamed::Error("changed"));
}
