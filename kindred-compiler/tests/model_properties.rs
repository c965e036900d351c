use {
    kindred_compiler::model::KindList,
    quickcheck::{Arbitrary, Gen, QuickCheck, TestResult},
};

/// A three-letter alphabet, small enough that generated lists repeat kinds often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Letter {
    A,
    B,
    C,
}

impl Arbitrary for Letter {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Letter::A, Letter::B, Letter::C]).unwrap()
    }
}

fn check<A: Arbitrary + std::fmt::Debug>(property: fn(A) -> TestResult) {
    QuickCheck::new().gen(Gen::new(12)).quickcheck(property)
}

#[test]
fn reverse_preserves_length() {
    check(|s: KindList<Letter>| TestResult::from_bool(s.reverse().len() == s.len()));
}

#[test]
fn reverse_is_an_involution() {
    check(|s: KindList<Letter>| TestResult::from_bool(s.reverse().reverse() == s));
}

#[test]
fn index_of_agrees_with_type_at() {
    check(|(s, k): (KindList<Letter>, Letter)| {
        let index = s.index_of(&k);
        if index == -1 {
            TestResult::from_bool(!s.0.contains(&k))
        } else {
            TestResult::from_bool(s.type_at(index as usize) == Some(&k))
        }
    });
}

#[test]
fn no_duplicates_leaves_each_kind_once() {
    check(|s: KindList<Letter>| {
        let deduped = s.no_duplicates();
        TestResult::from_bool(
            deduped.len() <= s.len()
                && deduped.0.iter().all(|k| deduped.occurrences(k) == 1)
                && s.0.iter().all(|k| deduped.contains(k)),
        )
    });
}

#[test]
fn replace_preserves_length() {
    check(|(s, k, u): (KindList<Letter>, Letter, Letter)| {
        TestResult::from_bool(
            s.replace(&k, &u).len() == s.len() && s.replace_all(&k, &u).len() == s.len(),
        )
    });
}

#[test]
fn erase_all_removes_every_occurrence() {
    check(|(s, k): (KindList<Letter>, Letter)| {
        let erased = s.erase_all(&k);
        TestResult::from_bool(
            !erased.contains(&k) && erased.len() + s.occurrences(&k) == s.len(),
        )
    });
}

#[test]
fn erase_removes_at_most_one() {
    check(|(s, k): (KindList<Letter>, Letter)| {
        let erased = s.erase(&k);
        let removed = if s.contains(&k) { 1 } else { 0 };
        TestResult::from_bool(erased.len() + removed == s.len())
    });
}

#[test]
fn append_to_empty() {
    let empty = KindList::<Letter>::new();
    assert_eq!(empty.append_list(&empty), empty);
    assert_eq!(empty.append_kind(Letter::A), KindList(vec![Letter::A]));
    check(|s: KindList<Letter>| TestResult::from_bool(empty_append(&s) == s));
}

fn empty_append(s: &KindList<Letter>) -> KindList<Letter> {
    KindList::new().append_list(s)
}
