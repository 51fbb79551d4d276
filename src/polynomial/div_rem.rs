// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::{Error, Result},
    polynomial::{Coefficient, Polynomial},
};
use log::trace;
use num_traits::{CheckedDiv, CheckedRem, Zero};
use std::ops::{Div, DivAssign, Rem, RemAssign};

/// floored modulo, the result has the sign of `modulus`
pub(crate) fn mod_floor(value: &Coefficient, modulus: &Coefficient) -> Coefficient {
    debug_assert!(!modulus.is_zero());
    value - modulus * (value / modulus).floor()
}

impl Polynomial {
    /// long division, `divisor` must not be zero
    fn long_division(&self, divisor: &Polynomial) -> (Polynomial, Polynomial) {
        debug_assert!(!divisor.is_zero());
        let (divisor_leading, divisor_degree) = divisor.leading_term();
        let mut quotient = self.zero_like();
        let mut remainder = self.clone();
        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let (remainder_leading, remainder_degree) = remainder.leading_term();
            let coefficient = remainder_leading / divisor_leading;
            let exponent = remainder_degree - divisor_degree;
            trace!("long division step: {}*x^{}", coefficient, exponent);
            remainder -= divisor.mul_term(&coefficient, exponent);
            quotient.terms.add_term(coefficient, exponent);
        }
        (quotient, remainder)
    }
    /// returns `(quotient, remainder)` with `self == quotient * divisor + remainder`
    /// and `remainder.degree() < divisor.degree()` (or `remainder` zero)
    pub fn checked_div_rem(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.long_division(divisor))
    }
    /// polynomial floor division, the quotient of [`checked_div_rem`](Self::checked_div_rem)
    pub fn checked_floor_div(&self, divisor: &Polynomial) -> Result<Polynomial> {
        Ok(self.checked_div_rem(divisor)?.0)
    }
    pub fn checked_rem_poly(&self, divisor: &Polynomial) -> Result<Polynomial> {
        Ok(self.checked_div_rem(divisor)?.1)
    }
    pub fn checked_div_scalar(&self, divisor: &Coefficient) -> Result<Polynomial> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.with_terms(
            self.terms
                .map_coefficients(|coefficient| coefficient / divisor),
        ))
    }
    /// reduces every coefficient with floored modulo
    pub fn checked_rem_scalar(&self, modulus: &Coefficient) -> Result<Polynomial> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.with_terms(
            self.terms
                .map_coefficients(|coefficient| mod_floor(coefficient, modulus)),
        ))
    }
}

impl CheckedDiv for Polynomial {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        self.checked_floor_div(rhs).ok()
    }
}

impl CheckedRem for Polynomial {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        self.checked_rem_poly(rhs).ok()
    }
}

macro_rules! impl_div_rem {
    ($l:ty, $r:ty, $div_fn:ident, $rem_fn:ident) => {
        impl Div<$r> for $l {
            type Output = Polynomial;
            fn div(self, rhs: $r) -> Polynomial {
                self.$div_fn(&rhs).expect("polynomial division by zero")
            }
        }

        impl Rem<$r> for $l {
            type Output = Polynomial;
            fn rem(self, rhs: $r) -> Polynomial {
                self.$rem_fn(&rhs).expect("polynomial division by zero")
            }
        }
    };
}

impl_div_rem!(Polynomial, Polynomial, checked_floor_div, checked_rem_poly);
impl_div_rem!(Polynomial, &'_ Polynomial, checked_floor_div, checked_rem_poly);
impl_div_rem!(&'_ Polynomial, Polynomial, checked_floor_div, checked_rem_poly);
impl_div_rem!(&'_ Polynomial, &'_ Polynomial, checked_floor_div, checked_rem_poly);
impl_div_rem!(Polynomial, Coefficient, checked_div_scalar, checked_rem_scalar);
impl_div_rem!(Polynomial, &'_ Coefficient, checked_div_scalar, checked_rem_scalar);
impl_div_rem!(&'_ Polynomial, Coefficient, checked_div_scalar, checked_rem_scalar);
impl_div_rem!(&'_ Polynomial, &'_ Coefficient, checked_div_scalar, checked_rem_scalar);

impl DivAssign for Polynomial {
    fn div_assign(&mut self, rhs: Polynomial) {
        *self = &*self / rhs;
    }
}

impl<'a> DivAssign<&'a Polynomial> for Polynomial {
    fn div_assign(&mut self, rhs: &Polynomial) {
        *self = &*self / rhs;
    }
}

impl RemAssign for Polynomial {
    fn rem_assign(&mut self, rhs: Polynomial) {
        *self = &*self % rhs;
    }
}

impl<'a> RemAssign<&'a Polynomial> for Polynomial {
    fn rem_assign(&mut self, rhs: &Polynomial) {
        *self = &*self % rhs;
    }
}
