//! A value-level model of the kind-sequence algebra.
//!
//! Every operation here computes, on a plain vector of kinds, the answer the type-level
//! operation of the same name in `kindred::sequence` computes on an inductive list. The build
//! script of `kindred` enumerates small sequences, runs them through this model and emits
//! assertions that the trait solver agrees.

use std::{fmt, iter::FromIterator};

/// An ordered list of kinds, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KindList<K>(pub Vec<K>);

impl<K> Default for KindList<K> {
    fn default() -> Self {
        KindList(Vec::new())
    }
}

impl<K> FromIterator<K> for KindList<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        KindList(iter.into_iter().collect())
    }
}

impl<K: Clone + PartialEq> KindList<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The kind at position `index`, or `None` past the end.
    pub fn type_at(&self, index: usize) -> Option<&K> {
        self.0.get(index)
    }

    /// The position of the first occurrence of `kind`, or `-1` if it does not occur.
    pub fn index_of(&self, kind: &K) -> isize {
        self.0
            .iter()
            .position(|k| k == kind)
            .map_or(-1, |i| i as isize)
    }

    pub fn occurrences(&self, kind: &K) -> usize {
        self.0.iter().filter(|k| *k == kind).count()
    }

    pub fn contains(&self, kind: &K) -> bool {
        self.index_of(kind) != -1
    }

    pub fn append_kind(&self, kind: K) -> Self {
        let mut kinds = self.0.clone();
        kinds.push(kind);
        KindList(kinds)
    }

    pub fn append_list(&self, other: &Self) -> Self {
        self.0.iter().chain(&other.0).cloned().collect()
    }

    /// Remove the first occurrence of `kind`.
    pub fn erase(&self, kind: &K) -> Self {
        let mut kinds = self.0.clone();
        if let Some(i) = kinds.iter().position(|k| k == kind) {
            let _ = kinds.remove(i);
        }
        KindList(kinds)
    }

    pub fn erase_all(&self, kind: &K) -> Self {
        self.0.iter().filter(|k| *k != kind).cloned().collect()
    }

    /// Deduplicate the tail, erase the head's kind from it, and put the head back in front.
    pub fn no_duplicates(&self) -> Self {
        match self.0.split_first() {
            None => Self::new(),
            Some((head, tail)) => {
                let rest = KindList(tail.to_vec()).no_duplicates().erase(head);
                std::iter::once(head.clone()).chain(rest.0).collect()
            }
        }
    }

    /// Replace the first occurrence of `kind` with `with`.
    pub fn replace(&self, kind: &K, with: &K) -> Self {
        let mut kinds = self.0.clone();
        if let Some(slot) = kinds.iter_mut().find(|k| *k == kind) {
            *slot = with.clone();
        }
        KindList(kinds)
    }

    pub fn replace_all(&self, kind: &K, with: &K) -> Self {
        self.0
            .iter()
            .map(|k| if k == kind { with.clone() } else { k.clone() })
            .collect()
    }

    pub fn reverse(&self) -> Self {
        self.0.iter().rev().cloned().collect()
    }

    /// Every list over `alphabet` of length at most `max_len`, shortest first.
    pub fn enumerate(alphabet: &[K], max_len: usize) -> Enumerate<'_, K> {
        Enumerate {
            alphabet,
            max_len,
            digits: Some(Vec::new()),
        }
    }
}

/// Iterator returned by [`KindList::enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<'a, K> {
    alphabet: &'a [K],
    max_len: usize,
    digits: Option<Vec<usize>>,
}

impl<'a, K: Clone> Iterator for Enumerate<'a, K> {
    type Item = KindList<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let alphabet = self.alphabet;
        let digits = self.digits.as_mut()?;
        let current = digits.iter().map(|&d| alphabet[d].clone()).collect();

        // Odometer increment; on overflow grow by one digit.
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            *digit += 1;
            if *digit < alphabet.len() {
                carry = false;
                break;
            }
            *digit = 0;
        }
        if carry {
            if digits.len() < self.max_len && !alphabet.is_empty() {
                digits.insert(0, 0);
            } else {
                self.digits = None;
            }
        }

        Some(current)
    }
}

/// Renders as the inductive list type: `(A, (B, ()))`.
impl<K: fmt::Display> fmt::Display for KindList<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.0 {
            write!(f, "({}, ", kind)?;
        }
        write!(f, "()")?;
        for _ in &self.0 {
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(feature = "quickcheck")]
mod arbitrary {
    use super::KindList;
    use quickcheck::{Arbitrary, Gen};

    impl<K: Arbitrary> Arbitrary for KindList<K> {
        fn arbitrary(g: &mut Gen) -> Self {
            KindList(Vec::arbitrary(g))
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            Box::new(self.0.shrink().map(KindList))
        }
    }
}
