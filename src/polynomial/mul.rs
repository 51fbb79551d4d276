// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::{Error, Result},
    polynomial::{Coefficient, Exponent, Polynomial, TermStore},
};
use num_traits::{CheckedMul, One, Zero};
use std::ops::{Mul, MulAssign};

pub(crate) fn degree_overflow() -> Error {
    Error::Overflow {
        operation: "polynomial degree",
    }
}

impl Polynomial {
    /// product of `self` and `rhs`, failing when the degree would not fit in an [`Exponent`]
    pub fn checked_mul_poly(&self, rhs: &Polynomial) -> Result<Polynomial> {
        let mut terms = TermStore::new();
        if self.is_zero() || rhs.is_zero() {
            return Ok(self.with_terms(terms));
        }
        // every exponent sum is bounded by the degree sum
        self.degree()
            .checked_add(rhs.degree())
            .ok_or_else(degree_overflow)?;
        for (l_coefficient, l_exponent) in self.terms() {
            for (r_coefficient, r_exponent) in rhs.terms() {
                terms.add_term(l_coefficient * r_coefficient, l_exponent + r_exponent);
            }
        }
        Ok(self.with_terms(terms))
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.checked_mul_poly(rhs)
            .expect("polynomial degree overflow")
    }
}

impl<'a> Mul<Polynomial> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        self * &rhs
    }
}

impl<'a> Mul<&'a Polynomial> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        &self * rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl MulAssign for Polynomial {
    fn mul_assign(&mut self, rhs: Polynomial) {
        *self = &*self * rhs;
    }
}

impl<'a> MulAssign<&'a Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) {
        *self = &*self * rhs;
    }
}

impl CheckedMul for Polynomial {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        self.checked_mul_poly(rhs).ok()
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::constant(1)
    }
    fn is_one(&self) -> bool {
        self.constant_value().map_or(false, One::is_one)
    }
}

impl Polynomial {
    /// multiplies by the single term `coefficient * x^exponent`,
    /// the caller keeps `self.degree() + exponent` within range
    pub(crate) fn mul_term(&self, coefficient: &Coefficient, exponent: Exponent) -> Polynomial {
        let mut terms = TermStore::new();
        for (l_coefficient, l_exponent) in self.terms() {
            terms.add_term(l_coefficient * coefficient, l_exponent + exponent);
        }
        self.with_terms(terms)
    }
}

fn mul_single(lhs: &Polynomial, rhs: &Coefficient) -> Polynomial {
    lhs.with_terms(lhs.terms.map_coefficients(|coefficient| coefficient * rhs))
}

impl<'a, 'b> Mul<&'b Coefficient> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Coefficient) -> Polynomial {
        mul_single(self, rhs)
    }
}

impl<'a> Mul<Coefficient> for &'a Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Coefficient) -> Polynomial {
        mul_single(self, &rhs)
    }
}

impl<'a> Mul<&'a Coefficient> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Coefficient) -> Polynomial {
        mul_single(&self, rhs)
    }
}

impl Mul<Coefficient> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Coefficient) -> Polynomial {
        mul_single(&self, &rhs)
    }
}

impl MulAssign<Coefficient> for Polynomial {
    fn mul_assign(&mut self, rhs: Coefficient) {
        *self = mul_single(self, &rhs);
    }
}

impl<'a> MulAssign<&'a Coefficient> for Polynomial {
    fn mul_assign(&mut self, rhs: &Coefficient) {
        *self = mul_single(self, rhs);
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

    fn test_mul(l: Polynomial, r: Polynomial, expected: &Polynomial) {
        test_op_helper(
            l,
            r,
            expected,
            |l, r| *l *= r,
            |l, r| *l *= r,
            |l, r| l * r,
            |l, r| l * r,
            |l, r| l * r,
            |l, r| l * r,
        );
    }

    #[test]
    fn test_mul_polynomials() {
        test_mul(poly(&[]), poly(&[]), &poly(&[]));
        test_mul(poly(&[(1, 0)]), poly(&[]), &poly(&[]));
        test_mul(poly(&[]), poly(&[(5, 3)]), &poly(&[]));
        test_mul(poly(&[(2, 0)]), poly(&[(3, 4)]), &poly(&[(6, 4)]));
        // x(x + 1) = x^2 + x
        test_mul(
            poly(&[(1, 1)]),
            poly(&[(1, 1), (1, 0)]),
            &poly(&[(1, 2), (1, 1)]),
        );
        // (x - 1)(x + 1) = x^2 - 1
        test_mul(
            poly(&[(1, 1), (-1, 0)]),
            poly(&[(1, 1), (1, 0)]),
            &poly(&[(1, 2), (-1, 0)]),
        );
        test_mul(
            poly(&[(1, 5), (2, 2), (3, 0)]),
            poly(&[(4, 3), (-1, 0)]),
            &poly(&[(4, 8), (8, 5), (-1, 5), (12, 3), (-2, 2), (-3, 0)]),
        );
    }

    #[test]
    fn test_mul_degree() {
        let l = poly(&[(3, 4), (1, 0)]);
        let r = poly(&[(-2, 3), (1, 1)]);
        assert_eq!((&l * &r).degree(), l.degree() + r.degree());
    }

    #[test]
    fn test_mul_scalar() {
        let p = poly(&[(2, 2), (-3, 0)]);
        assert_eq!(&p * 3.into_coefficient(), poly(&[(6, 2), (-9, 0)]));
        assert_eq!(&p * 0.into_coefficient(), Polynomial::zero());
        let mut q = p.clone();
        q *= &(1, 2).into_coefficient();
        assert_eq!(q, poly(&[(1, 2)]) + &(-3, 2).into_coefficient());
    }

    #[test]
    fn test_mul_term() {
        let p = poly(&[(2, 2), (-3, 0)]);
        assert_eq!(
            p.mul_term(&5.into_coefficient(), 3),
            poly(&[(10, 5), (-15, 3)])
        );
    }

    #[test]
    fn test_mul_degree_overflow() {
        let l = poly(&[(1, 4_000_000_000)]);
        let r = poly(&[(2, 300_000_000), (1, 0)]);
        assert_eq!(l.checked_mul_poly(&r), Err(degree_overflow()));
        assert_eq!(l.checked_mul(&r), None);
        let r = poly(&[(2, 294_967_295), (1, 0)]);
        assert_eq!(
            l.checked_mul_poly(&r),
            Ok(poly(&[(2, u32::MAX), (1, 4_000_000_000)]))
        );
        // zero absorbs any degree
        assert_eq!(l.checked_mul_poly(&Polynomial::zero()), Ok(Polynomial::zero()));
    }

    #[test]
    #[should_panic(expected = "polynomial degree overflow")]
    fn test_mul_operator_overflow_panics() {
        let p = poly(&[(1, u32::MAX)]);
        let _ = &p * &p;
    }

    #[test]
    fn test_one() {
        assert!(Polynomial::one().is_one());
        assert!(!poly(&[(1, 1)]).is_one());
        assert!(!Polynomial::zero().is_one());
    }
}
