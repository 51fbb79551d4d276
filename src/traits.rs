// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::{Error, Result};
use crate::polynomial::Coefficient;
use num_bigint::BigInt;
use num_traits::Zero;

pub trait PolynomialEval<T> {
    fn eval(self, x: &T) -> T;
}

/// Conversion of exact numbers into polynomial coefficients.
pub trait IntoCoefficient: Sized {
    fn into_coefficient(self) -> Coefficient;
    /// like [`into_coefficient`](Self::into_coefficient), but reports a zero
    /// denominator as [`Error::DivisionByZero`] instead of panicking
    fn try_into_coefficient(self) -> Result<Coefficient> {
        Ok(self.into_coefficient())
    }
}

macro_rules! impl_into_coefficient_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoCoefficient for $t {
                fn into_coefficient(self) -> Coefficient {
                    Coefficient::from_integer(BigInt::from(self))
                }
            }
        )*
    };
}

impl_into_coefficient_for_int!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

impl IntoCoefficient for BigInt {
    fn into_coefficient(self) -> Coefficient {
        Coefficient::from_integer(self)
    }
}

impl IntoCoefficient for Coefficient {
    fn into_coefficient(self) -> Coefficient {
        self
    }
}

impl IntoCoefficient for &'_ Coefficient {
    fn into_coefficient(self) -> Coefficient {
        self.clone()
    }
}

/// `(numerator, denominator)`
///
/// # Panics
///
/// [`into_coefficient`](IntoCoefficient::into_coefficient) panics if the
/// denominator is zero.
impl<N: Into<BigInt>, D: Into<BigInt>> IntoCoefficient for (N, D) {
    fn into_coefficient(self) -> Coefficient {
        Coefficient::new(self.0.into(), self.1.into())
    }
    fn try_into_coefficient(self) -> Result<Coefficient> {
        let denominator: BigInt = self.1.into();
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Coefficient::new(self.0.into(), denominator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_coefficient() {
        assert_eq!(3i32.into_coefficient(), Coefficient::from_integer(3.into()));
        assert_eq!(
            (6, -4).into_coefficient(),
            Coefficient::new((-3).into(), 2.into())
        );
        assert_eq!(
            BigInt::from(7).into_coefficient(),
            7u64.into_coefficient()
        );
    }

    #[test]
    fn test_try_into_coefficient() {
        assert_eq!((1, 0).try_into_coefficient(), Err(Error::DivisionByZero));
        assert_eq!(
            (2, 4).try_into_coefficient(),
            Ok(Coefficient::new(1.into(), 2.into()))
        );
        assert_eq!(5.try_into_coefficient(), Ok(5.into_coefficient()));
    }
}
