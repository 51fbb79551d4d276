// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::{Error, Result},
    polynomial::{Coefficient, Exponent},
};
use num_traits::{ToPrimitive, Zero};
use std::{
    collections::{btree_map, BTreeMap},
    iter::FusedIterator,
};

/// Sparse exponent to coefficient map.
///
/// # Invariants
///
/// * there is always at least one stored term
/// * no stored coefficient is zero, except for the zero polynomial which is
///   stored as the single term `0 * x^0`
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TermStore {
    terms: BTreeMap<Exponent, Coefficient>,
}

impl Default for TermStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TermStore {
    /// the zero polynomial
    pub fn new() -> Self {
        let mut terms = BTreeMap::new();
        terms.insert(0, Coefficient::zero());
        Self { terms }
    }
    fn canonicalize(&mut self) {
        if self.terms.is_empty() {
            self.terms.insert(0, Coefficient::zero());
        } else if self.terms.len() > 1 {
            self.terms.retain(|_, coefficient| !coefficient.is_zero());
        }
    }
    /// insert or overwrite the term at `exponent`
    pub fn set(&mut self, exponent: Exponent, coefficient: Coefficient) {
        if coefficient.is_zero() {
            self.terms.remove(&exponent);
        } else {
            self.terms.insert(exponent, coefficient);
        }
        self.canonicalize();
    }
    /// accumulate `coefficient` into the term at `exponent`
    pub fn add_term(&mut self, coefficient: Coefficient, exponent: Exponent) {
        if coefficient.is_zero() {
            return;
        }
        match self.terms.entry(exponent) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(coefficient);
            }
            btree_map::Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
        }
        self.canonicalize();
    }
    pub fn remove(&mut self, exponent: Exponent) -> Option<Coefficient> {
        let retval = self.terms.remove(&exponent);
        self.canonicalize();
        retval
    }
    pub fn clear(&mut self) {
        self.terms.clear();
        self.canonicalize();
    }
    /// `None` means there is no term at `exponent`
    pub fn get(&self, exponent: Exponent) -> Option<&Coefficient> {
        self.terms.get(&exponent)
    }
    /// the term with the largest exponent
    pub fn max_term(&self) -> (&Coefficient, Exponent) {
        let (&exponent, coefficient) = self
            .terms
            .iter()
            .next_back()
            .unwrap_or_else(|| unreachable!("term store is never empty"));
        (coefficient, exponent)
    }
    pub fn degree(&self) -> Exponent {
        self.max_term().1
    }
    pub fn is_zero(&self) -> bool {
        self.terms.len() == 1 && self.max_term().0.is_zero()
    }
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    /// always `false`, the zero polynomial stores one term
    pub fn is_empty(&self) -> bool {
        false
    }
    pub fn iter(&self) -> Terms {
        Terms {
            inner: self.terms.iter(),
        }
    }
    pub fn map_coefficients<F: FnMut(&Coefficient) -> Coefficient>(&self, mut f: F) -> Self {
        let mut retval = TermStore::new();
        for (coefficient, exponent) in self.iter() {
            retval.add_term(f(coefficient), exponent);
        }
        retval
    }
}

/// Iterator over `(coefficient, exponent)` pairs in ascending exponent order.
#[derive(Clone, Debug)]
pub struct Terms<'a> {
    inner: btree_map::Iter<'a, Exponent, Coefficient>,
}

impl<'a> Iterator for Terms<'a> {
    type Item = (&'a Coefficient, Exponent);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&exponent, coefficient)| (coefficient, exponent))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Terms<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(&exponent, coefficient)| (coefficient, exponent))
    }
}

impl ExactSizeIterator for Terms<'_> {}

impl FusedIterator for Terms<'_> {}

#[derive(Debug)]
pub struct IntoTerms {
    inner: btree_map::IntoIter<Exponent, Coefficient>,
}

impl Iterator for IntoTerms {
    type Item = (Coefficient, Exponent);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(exponent, coefficient)| (coefficient, exponent))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoTerms {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(exponent, coefficient)| (coefficient, exponent))
    }
}

impl ExactSizeIterator for IntoTerms {}

impl IntoIterator for TermStore {
    type Item = (Coefficient, Exponent);
    type IntoIter = IntoTerms;
    fn into_iter(self) -> IntoTerms {
        IntoTerms {
            inner: self.terms.into_iter(),
        }
    }
}

impl<'a> IntoIterator for &'a TermStore {
    type Item = (&'a Coefficient, Exponent);
    type IntoIter = Terms<'a>;
    fn into_iter(self) -> Terms<'a> {
        self.iter()
    }
}

/// exponents arriving from untyped sources must be non-negative
pub fn checked_exponent(exponent: i64) -> Result<Exponent> {
    exponent.to_u32().ok_or(Error::InvalidTerm {
        reason: "exponents must be non-negative integers",
    })
}

pub fn checked_float_coefficient(value: f64) -> Result<Coefficient> {
    Coefficient::from_float(value).ok_or(Error::InvalidTerm {
        reason: "coefficients must be finite numbers",
    })
}
