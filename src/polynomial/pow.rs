// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::{Error, Result},
    polynomial::{div_rem::mod_floor, mul::degree_overflow, Coefficient, Exponent, Polynomial},
};
use log::debug;
use num_traits::{One, Pow, ToPrimitive, Zero};

/// converts a parsed power into an exponent
pub(crate) fn checked_power(power: &Coefficient) -> Result<Exponent> {
    if power.is_integer() {
        if let Some(exponent) = power.to_integer().to_u32() {
            return Ok(exponent);
        }
    }
    Err(Error::InvalidExponent {
        exponent: power.to_string(),
    })
}

impl Polynomial {
    /// square-and-multiply, ignoring any configured moduli
    pub(crate) fn pow_unreduced(&self, exponent: Exponent) -> Result<Polynomial> {
        self.degree()
            .checked_mul(exponent)
            .ok_or_else(degree_overflow)?;
        let mut retval = self.zero_like() + Coefficient::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent != 0 {
            if exponent & 1 != 0 {
                retval = retval.checked_mul_poly(&base)?;
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.checked_mul_poly(&base)?;
            }
        }
        Ok(retval)
    }
    /// applies the polynomial modulus, then the coefficient modulus, to `value`
    fn reduce(&self, value: Polynomial) -> Polynomial {
        let value = match &self.polynomial_modulus {
            Some(modulus) => value.long_division_remainder(modulus),
            None => value,
        };
        match &self.coefficient_modulus {
            Some(modulus) => value.with_terms(
                value
                    .terms
                    .map_coefficients(|coefficient| mod_floor(coefficient, modulus)),
            ),
            None => value,
        }
    }
    fn long_division_remainder(&self, modulus: &Polynomial) -> Polynomial {
        self.checked_rem_poly(modulus)
            .unwrap_or_else(|_| unreachable!("moduli are checked to be non-zero when configured"))
    }
    fn pow_reduced(&self, exponent: Exponent) -> Result<Polynomial> {
        debug!(
            "modular power: exponent={} polynomial_modulus={:?} coefficient_modulus={:?}",
            exponent,
            self.polynomial_modulus().map(ToString::to_string),
            self.coefficient_modulus().map(ToString::to_string),
        );
        if self.polynomial_modulus.is_none() {
            self.degree()
                .checked_mul(exponent)
                .ok_or_else(degree_overflow)?;
        }
        let mut retval = self.zero_like() + Coefficient::one();
        let mut base = self.reduce(self.clone());
        let mut exponent = exponent;
        while exponent != 0 {
            if exponent & 1 != 0 {
                retval = self.reduce(retval.checked_mul_poly(&base)?);
            }
            exponent >>= 1;
            if exponent != 0 {
                base = self.reduce(base.checked_mul_poly(&base)?);
            }
        }
        Ok(retval)
    }
    /// raises to `exponent`, reducing by the configured moduli after every multiplication
    ///
    /// Fails with [`Error::Overflow`] when an intermediate degree does not fit in an [`Exponent`].
    pub fn try_pow(&self, exponent: Exponent) -> Result<Polynomial> {
        if self.polynomial_modulus.is_none() && self.coefficient_modulus.is_none() {
            self.pow_unreduced(exponent)
        } else {
            self.pow_reduced(exponent)
        }
    }
    /// raises to a signed power, rejecting negative exponents
    pub fn checked_pow(&self, exponent: i64) -> Result<Polynomial> {
        match exponent.to_u32() {
            Some(exponent) => self.try_pow(exponent),
            None => Err(Error::InvalidExponent {
                exponent: exponent.to_string(),
            }),
        }
    }
}

impl<'a> Pow<Exponent> for &'a Polynomial {
    type Output = Polynomial;
    fn pow(self, exponent: Exponent) -> Polynomial {
        self.try_pow(exponent).expect("polynomial degree overflow")
    }
}

impl Pow<Exponent> for Polynomial {
    type Output = Polynomial;
    fn pow(self, exponent: Exponent) -> Polynomial {
        (&self).pow(exponent)
    }
}

/// `base^exponent` reduced modulo `modulus` after every multiplication
pub fn exp_mod(base: &Polynomial, exponent: Exponent, modulus: &Polynomial) -> Result<Polynomial> {
    if modulus.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let mut retval = base.zero_like() + Coefficient::one();
    let mut base = base.long_division_remainder(modulus);
    let mut exponent = exponent;
    while exponent != 0 {
        if exponent & 1 != 0 {
            retval = retval.checked_mul_poly(&base)?.long_division_remainder(modulus);
        }
        exponent >>= 1;
        if exponent != 0 {
            base = base.checked_mul_poly(&base)?.long_division_remainder(modulus);
        }
    }
    Ok(retval.long_division_remainder(modulus))
}
