// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{Coefficient, Polynomial, TermStore};
use num_traits::{CheckedAdd, CheckedSub, Zero};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

fn add_sub_assign<MapRhs: Fn(&Coefficient) -> Coefficient>(
    lhs: &mut Polynomial,
    rhs: &Polynomial,
    map_rhs: MapRhs,
) {
    for (coefficient, exponent) in rhs.terms() {
        lhs.terms.add_term(map_rhs(coefficient), exponent);
    }
}

fn add_sub_assign_single<MapRhs: Fn(&Coefficient) -> Coefficient>(
    lhs: &mut Polynomial,
    rhs: &Coefficient,
    map_rhs: MapRhs,
) {
    lhs.terms.add_term(map_rhs(rhs), 0);
}

fn identity(value: &Coefficient) -> Coefficient {
    value.clone()
}

fn negate(value: &Coefficient) -> Coefficient {
    -value
}

macro_rules! impl_add_sub {
    ($trait_name:ident, $fn_name:ident, $assign_trait_name:ident, $assign_fn_name:ident, $map_rhs:expr) => {
        impl $assign_trait_name for Polynomial {
            fn $assign_fn_name(&mut self, rhs: Polynomial) {
                add_sub_assign(self, &rhs, $map_rhs);
            }
        }

        impl<'a> $assign_trait_name<&'a Polynomial> for Polynomial {
            fn $assign_fn_name(&mut self, rhs: &Polynomial) {
                add_sub_assign(self, rhs, $map_rhs);
            }
        }

        impl $assign_trait_name<Coefficient> for Polynomial {
            fn $assign_fn_name(&mut self, rhs: Coefficient) {
                add_sub_assign_single(self, &rhs, $map_rhs);
            }
        }

        impl<'a> $assign_trait_name<&'a Coefficient> for Polynomial {
            fn $assign_fn_name(&mut self, rhs: &Coefficient) {
                add_sub_assign_single(self, rhs, $map_rhs);
            }
        }

        impl $trait_name for Polynomial {
            type Output = Polynomial;
            fn $fn_name(mut self, rhs: Polynomial) -> Polynomial {
                self.$assign_fn_name(&rhs);
                self
            }
        }

        impl<'a> $trait_name<&'a Polynomial> for Polynomial {
            type Output = Polynomial;
            fn $fn_name(mut self, rhs: &Polynomial) -> Polynomial {
                self.$assign_fn_name(rhs);
                self
            }
        }

        impl<'a> $trait_name<Polynomial> for &'a Polynomial {
            type Output = Polynomial;
            fn $fn_name(self, rhs: Polynomial) -> Polynomial {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(&rhs);
                lhs
            }
        }

        impl<'a, 'b> $trait_name<&'b Polynomial> for &'a Polynomial {
            type Output = Polynomial;
            fn $fn_name(self, rhs: &Polynomial) -> Polynomial {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(rhs);
                lhs
            }
        }

        impl $trait_name<Coefficient> for Polynomial {
            type Output = Polynomial;
            fn $fn_name(mut self, rhs: Coefficient) -> Polynomial {
                self.$assign_fn_name(&rhs);
                self
            }
        }

        impl<'a> $trait_name<&'a Coefficient> for Polynomial {
            type Output = Polynomial;
            fn $fn_name(mut self, rhs: &Coefficient) -> Polynomial {
                self.$assign_fn_name(rhs);
                self
            }
        }

        impl<'a> $trait_name<Coefficient> for &'a Polynomial {
            type Output = Polynomial;
            fn $fn_name(self, rhs: Coefficient) -> Polynomial {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(&rhs);
                lhs
            }
        }

        impl<'a, 'b> $trait_name<&'b Coefficient> for &'a Polynomial {
            type Output = Polynomial;
            fn $fn_name(self, rhs: &Coefficient) -> Polynomial {
                let mut lhs = self.clone();
                lhs.$assign_fn_name(rhs);
                lhs
            }
        }
    };
}

impl_add_sub!(Add, add, AddAssign, add_assign, identity);
impl_add_sub!(Sub, sub, SubAssign, sub_assign, negate);

impl CheckedAdd for Polynomial {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }
}

impl CheckedSub for Polynomial {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(self - rhs)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Default::default()
    }
    fn set_zero(&mut self) {
        self.terms.clear();
    }
    fn is_zero(&self) -> bool {
        self.terms.is_zero()
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        -&self
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        self.with_terms(self.terms.map_coefficients(negate))
    }
}

impl Polynomial {
    /// the zero polynomial with `self`'s variable and moduli
    pub(crate) fn zero_like(&self) -> Polynomial {
        self.with_terms(TermStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::IntoCoefficient;
    use crate::util::tests::test_op_helper;

    fn poly(terms: &[(i64, u32)]) -> Polynomial {
        terms.iter().copied().collect()
    }

    fn test_add(l: Polynomial, r: Polynomial, expected: &Polynomial) {
        test_op_helper(
            l,
            r,
            expected,
            |l, r| *l += r,
            |l, r| *l += r,
            |l, r| l + r,
            |l, r| l + r,
            |l, r| l + r,
            |l, r| l + r,
        );
    }

    fn test_sub(l: Polynomial, r: Polynomial, expected: &Polynomial) {
        test_op_helper(
            l,
            r,
            expected,
            |l, r| *l -= r,
            |l, r| *l -= r,
            |l, r| l - r,
            |l, r| l - r,
            |l, r| l - r,
            |l, r| l - r,
        );
    }

    #[test]
    fn test_add_polynomials() {
        test_add(poly(&[]), poly(&[]), &poly(&[]));
        test_add(poly(&[(1, 0)]), poly(&[]), &poly(&[(1, 0)]));
        test_add(
            poly(&[(2, 2), (3, 1)]),
            poly(&[(-5, 0), (1, 1)]),
            &poly(&[(2, 2), (4, 1), (-5, 0)]),
        );
        test_add(
            poly(&[(2, 2), (3, 1)]),
            poly(&[(-2, 2), (-3, 1)]),
            &Polynomial::zero(),
        );
        test_add(
            poly(&[(1, 10)]),
            poly(&[(1, 0)]),
            &poly(&[(1, 0), (1, 10)]),
        );
    }

    #[test]
    fn test_sub_polynomials() {
        test_sub(poly(&[]), poly(&[]), &poly(&[]));
        test_sub(poly(&[]), poly(&[(1, 3)]), &poly(&[(-1, 3)]));
        test_sub(
            poly(&[(2, 2), (3, 1)]),
            poly(&[(2, 2), (-5, 0)]),
            &poly(&[(3, 1), (5, 0)]),
        );
        let p = poly(&[(7, 4), (-1, 1), (3, 0)]);
        test_sub(p.clone(), p, &Polynomial::zero());
    }

    #[test]
    fn test_scalar_add_sub() {
        let p = poly(&[(1, 1)]);
        assert_eq!(&p + 3.into_coefficient(), poly(&[(1, 1), (3, 0)]));
        assert_eq!(&p - 3.into_coefficient(), poly(&[(1, 1), (-3, 0)]));
        let mut q = poly(&[(1, 1), (3, 0)]);
        q -= &3.into_coefficient();
        assert_eq!(q, p);
    }

    #[test]
    fn test_neg() {
        let p = poly(&[(2, 2), (-3, 0)]);
        assert_eq!(-&p, poly(&[(-2, 2), (3, 0)]));
        assert_eq!(-(-p.clone()), p);
        assert_eq!(-Polynomial::zero(), Polynomial::zero());
    }

    #[test]
    fn test_result_keeps_receiver_configuration() {
        let x = Polynomial::term(1, 1).with_variable('t');
        let sum = &x + &Polynomial::constant(1);
        assert_eq!(sum.variable(), 't');
        assert_eq!(sum.zero_like().variable(), 't');
    }
}
