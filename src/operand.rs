// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Values that can take part in polynomial arithmetic.
//!
//! Mixing numbers and polynomials is resolved once per operation by matching
//! on [`Operand`]; a number meeting a polynomial is promoted to a constant
//! polynomial that shares the other operand's variable.

use crate::error::{Error, Result};
use crate::polynomial::{checked_power, mod_floor, Coefficient, Polynomial};
use crate::traits::IntoCoefficient;
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Number(Coefficient),
    Polynomial(Polynomial),
}

impl Operand {
    pub fn number<C: IntoCoefficient>(value: C) -> Self {
        Operand::Number(value.into_coefficient())
    }
    pub fn is_number(&self) -> bool {
        matches!(self, Operand::Number(_))
    }
    /// a number becomes a constant polynomial in `variable`
    pub fn into_polynomial(self, variable: char) -> Polynomial {
        match self {
            Operand::Number(value) => Polynomial::constant(value).with_variable(variable),
            Operand::Polynomial(value) => value,
        }
    }
    /// the value as a number, if it is a number or a constant polynomial
    pub fn as_constant(&self) -> Option<&Coefficient> {
        match self {
            Operand::Number(value) => Some(value),
            Operand::Polynomial(value) => value.constant_value(),
        }
    }
    /// `*`, failing instead of overflowing the degree of the product
    pub fn checked_mul(self, rhs: Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Polynomial(lhs), Operand::Polynomial(rhs)) => {
                Ok(Operand::Polynomial(lhs.checked_mul_poly(&rhs)?))
            }
            (lhs, rhs) => Ok(lhs * rhs),
        }
    }
    /// `%`: coefficient-wise modulo when `rhs` is constant, polynomial remainder otherwise
    pub fn checked_rem(self, rhs: Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Number(lhs), Operand::Number(rhs)) => {
                if rhs.is_zero() {
                    return Err(Error::DivisionByZero);
                }
                Ok(Operand::Number(mod_floor(&lhs, &rhs)))
            }
            (Operand::Number(lhs), Operand::Polynomial(rhs)) => {
                let lhs = Polynomial::constant(lhs).with_variable(rhs.variable());
                Operand::Polynomial(lhs).checked_rem(Operand::Polynomial(rhs))
            }
            (Operand::Polynomial(lhs), rhs) => match rhs.as_constant() {
                Some(modulus) => Ok(Operand::Polynomial(lhs.checked_rem_scalar(modulus)?)),
                None => {
                    let rhs = rhs.into_polynomial(lhs.variable());
                    Ok(Operand::Polynomial(lhs.checked_rem_poly(&rhs)?))
                }
            },
        }
    }
    /// `^`: the power must be a constant non-negative integer
    pub fn checked_pow(self, rhs: Operand) -> Result<Operand> {
        let exponent = match rhs.as_constant() {
            Some(power) => checked_power(power)?,
            None => {
                return Err(Error::InvalidExponent {
                    exponent: rhs.to_string(),
                })
            }
        };
        Ok(match self {
            Operand::Number(base) => Operand::Number(num_traits::pow(base, exponent as usize)),
            Operand::Polynomial(base) => Operand::Polynomial(base.try_pow(exponent)?),
        })
    }
}

macro_rules! impl_operand_op {
    ($trait_name:ident, $fn_name:ident) => {
        impl $trait_name for Operand {
            type Output = Operand;
            fn $fn_name(self, rhs: Operand) -> Operand {
                match (self, rhs) {
                    (Operand::Number(lhs), Operand::Number(rhs)) => Operand::Number(lhs.$fn_name(rhs)),
                    (Operand::Number(lhs), Operand::Polynomial(rhs)) => {
                        let lhs = Polynomial::constant(lhs).with_variable(rhs.variable());
                        Operand::Polynomial(lhs.$fn_name(rhs))
                    }
                    (Operand::Polynomial(lhs), Operand::Number(rhs)) => Operand::Polynomial(lhs.$fn_name(rhs)),
                    (Operand::Polynomial(lhs), Operand::Polynomial(rhs)) => {
                        Operand::Polynomial(lhs.$fn_name(rhs))
                    }
                }
            }
        }
    };
}

impl_operand_op!(Add, add);
impl_operand_op!(Sub, sub);
impl_operand_op!(Mul, mul);

impl Neg for Operand {
    type Output = Operand;
    fn neg(self) -> Operand {
        match self {
            Operand::Number(value) => Operand::Number(-value),
            Operand::Polynomial(value) => Operand::Polynomial(-value),
        }
    }
}

impl From<Coefficient> for Operand {
    fn from(value: Coefficient) -> Self {
        Operand::Number(value)
    }
}

impl From<Polynomial> for Operand {
    fn from(value: Polynomial) -> Self {
        Operand::Polynomial(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Number(value) => fmt::Display::fmt(&Polynomial::constant(value), f),
            Operand::Polynomial(value) => fmt::Display::fmt(value, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(terms: &[(i64, u32)]) -> Polynomial {
        terms.iter().copied().collect()
    }

    #[test]
    fn test_number_arithmetic_stays_numeric() {
        assert_eq!(Operand::number(2) + Operand::number(3), Operand::number(5));
        assert_eq!(Operand::number(2) - Operand::number(3), Operand::number(-1));
        assert_eq!(Operand::number(2) * Operand::number(3), Operand::number(6));
        assert_eq!(-Operand::number(2), Operand::number(-2));
        assert_eq!(
            Operand::number(7).checked_rem(Operand::number(3)),
            Ok(Operand::number(1))
        );
        assert_eq!(
            Operand::number(2).checked_pow(Operand::number(10)),
            Ok(Operand::number(1024))
        );
    }

    #[test]
    fn test_mixed_arithmetic_promotes() {
        let t = poly(&[(1, 1)]).with_variable('t');
        let sum = Operand::number(1) + Operand::Polynomial(t.clone());
        assert_eq!(sum, Operand::Polynomial(poly(&[(1, 1), (1, 0)]).with_variable('t')));
        let difference = Operand::number(1) - Operand::Polynomial(t.clone());
        assert_eq!(
            difference,
            Operand::Polynomial(poly(&[(-1, 1), (1, 0)]).with_variable('t'))
        );
        let product = Operand::Polynomial(t) * Operand::number(4);
        assert_eq!(product, Operand::Polynomial(poly(&[(4, 1)]).with_variable('t')));
    }

    #[test]
    fn test_rem_dispatch() {
        let p = Operand::Polynomial(poly(&[(4, 2), (5, 0)]));
        assert_eq!(
            p.clone().checked_rem(Operand::number(3)),
            Ok(Operand::Polynomial(poly(&[(1, 2), (2, 0)])))
        );
        // a constant polynomial selects the scalar form as well
        assert_eq!(
            p.clone().checked_rem(Operand::Polynomial(Polynomial::constant(3))),
            Ok(Operand::Polynomial(poly(&[(1, 2), (2, 0)])))
        );
        assert_eq!(
            p.clone().checked_rem(Operand::Polynomial(poly(&[(1, 1)]))),
            Ok(Operand::Polynomial(poly(&[(5, 0)])))
        );
        assert_eq!(
            Operand::number(5).checked_rem(Operand::Polynomial(poly(&[(1, 1)]))),
            Ok(Operand::Polynomial(poly(&[(5, 0)])))
        );
        assert_eq!(p.checked_rem(Operand::number(0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_pow_dispatch() {
        let x = Operand::Polynomial(poly(&[(1, 1)]));
        assert_eq!(
            x.clone().checked_pow(Operand::number(3)),
            Ok(Operand::Polynomial(poly(&[(1, 3)])))
        );
        assert!(matches!(
            x.clone().checked_pow(x.clone()),
            Err(Error::InvalidExponent { .. })
        ));
        assert!(matches!(
            x.clone().checked_pow(Operand::number(-2)),
            Err(Error::InvalidExponent { .. })
        ));
        assert!(matches!(
            x.checked_pow(Operand::number((1, 2))),
            Err(Error::InvalidExponent { .. })
        ));
    }

    #[test]
    fn test_checked_mul() {
        let x = Operand::Polynomial(poly(&[(1, 1)]));
        assert_eq!(
            x.clone().checked_mul(Operand::number(3)),
            Ok(Operand::Polynomial(poly(&[(3, 1)])))
        );
        assert_eq!(
            x.clone().checked_mul(x),
            Ok(Operand::Polynomial(poly(&[(1, 2)])))
        );
        let big = Operand::Polynomial(poly(&[(1, 3_000_000_000)]));
        assert!(matches!(
            big.clone().checked_mul(big.clone()),
            Err(Error::Overflow { .. })
        ));
        assert!(matches!(
            big.checked_pow(Operand::number(2)),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn test_into_polynomial() {
        assert_eq!(
            Operand::number(3).into_polynomial('y'),
            Polynomial::constant(3).with_variable('y')
        );
        assert!(Operand::number(3).is_number());
        assert_eq!(Operand::number(3).to_string(), "3");
    }
}
