// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::error::{Error, Result};
use crate::operand::Operand;
use crate::parser::{self, ParseOptions};
use crate::traits::{IntoCoefficient, PolynomialEval};
use crate::util::Sign;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::str::FromStr;

mod add_sub;
mod div_rem;
mod mul;
mod pow;
mod term_store;

pub(crate) use div_rem::mod_floor;
pub(crate) use pow::checked_power;
pub use pow::exp_mod;
pub use term_store::{checked_exponent, checked_float_coefficient, IntoTerms, TermStore, Terms};

/// Coefficients are exact rationals so that long division is always exact.
pub type Coefficient = BigRational;
pub type Exponent = u32;

pub const DEFAULT_VARIABLE: char = 'x';

/// A sparse single-variable polynomial.
///
/// Besides its terms, every polynomial carries the symbol it is rendered with
/// and two optional moduli used by [`Pow`](num_traits::Pow): after each
/// multiplication the intermediate result is reduced modulo the polynomial
/// modulus, then coefficient-wise modulo the coefficient modulus.
///
/// ```
/// use polykit::Polynomial;
///
/// let p: Polynomial = "2x^2 + 3x - 5".parse().unwrap();
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p.to_string(), "2x^2 + 3x - 5");
/// ```
#[derive(Clone, Debug)]
pub struct Polynomial {
    terms: TermStore,
    variable: char,
    coefficient_modulus: Option<Coefficient>,
    polynomial_modulus: Option<Box<Polynomial>>,
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::from_store(TermStore::new())
    }
}

// the term store is canonical, so comparing stores compares degree, term
// count and every coefficient at once
impl PartialEq for Polynomial {
    fn eq(&self, rhs: &Self) -> bool {
        self.variable == rhs.variable && self.terms == rhs.terms
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variable.hash(state);
        self.terms.hash(state);
    }
}

impl Polynomial {
    fn from_store(terms: TermStore) -> Self {
        Self {
            terms,
            variable: DEFAULT_VARIABLE,
            coefficient_modulus: None,
            polynomial_modulus: None,
        }
    }
    /// a new polynomial sharing `self`'s variable and moduli
    pub(crate) fn with_terms(&self, terms: TermStore) -> Self {
        Self {
            terms,
            variable: self.variable,
            coefficient_modulus: self.coefficient_modulus.clone(),
            polynomial_modulus: self.polynomial_modulus.clone(),
        }
    }
    pub fn constant<C: IntoCoefficient>(value: C) -> Self {
        Self::term(value, 0)
    }
    pub fn term<C: IntoCoefficient>(coefficient: C, exponent: Exponent) -> Self {
        let mut terms = TermStore::new();
        terms.set(exponent, coefficient.into_coefficient());
        Self::from_store(terms)
    }
    /// builds `sum(coefficients[i] * x^exponents[i])`
    pub fn from_lists<C: IntoCoefficient>(coefficients: Vec<C>, exponents: &[i64]) -> Result<Self> {
        if coefficients.len() != exponents.len() {
            return Err(Error::InvalidTerm {
                reason: "coefficient and exponent lists differ in length",
            });
        }
        let exponents = exponents
            .iter()
            .map(|&exponent| checked_exponent(exponent))
            .collect::<Result<Vec<_>>>()?;
        Ok(coefficients.into_iter().zip(exponents).collect())
    }
    pub fn from_float_lists(coefficients: &[f64], exponents: &[i64]) -> Result<Self> {
        let coefficients = coefficients
            .iter()
            .map(|&coefficient| checked_float_coefficient(coefficient))
            .collect::<Result<Vec<_>>>()?;
        Self::from_lists(coefficients, exponents)
    }
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse(input, &ParseOptions::default())
    }
    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self> {
        parser::parse(input, options)
    }
    pub fn with_variable(mut self, variable: char) -> Self {
        self.variable = variable;
        self
    }
    pub fn with_coefficient_modulus<C: IntoCoefficient>(mut self, modulus: C) -> Result<Self> {
        let modulus = modulus.try_into_coefficient()?;
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.coefficient_modulus = Some(modulus);
        Ok(self)
    }
    pub fn with_polynomial_modulus(mut self, modulus: Polynomial) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.polynomial_modulus = Some(Box::new(modulus));
        Ok(self)
    }
    pub fn variable(&self) -> char {
        self.variable
    }
    pub fn coefficient_modulus(&self) -> Option<&Coefficient> {
        self.coefficient_modulus.as_ref()
    }
    pub fn polynomial_modulus(&self) -> Option<&Polynomial> {
        self.polynomial_modulus.as_deref()
    }
    pub fn term_store(&self) -> &TermStore {
        &self.terms
    }
    /// iterates `(coefficient, exponent)` pairs in ascending exponent order
    pub fn terms(&self) -> Terms {
        self.terms.iter()
    }
    pub fn len(&self) -> usize {
        self.terms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
    pub fn degree(&self) -> Exponent {
        self.terms.degree()
    }
    pub fn leading_term(&self) -> (&Coefficient, Exponent) {
        self.terms.max_term()
    }
    pub fn leading_coefficient(&self) -> &Coefficient {
        self.terms.max_term().0
    }
    pub fn coefficient(&self, exponent: Exponent) -> Option<&Coefficient> {
        self.terms.get(exponent)
    }
    pub fn contains(&self, (coefficient, exponent): (&Coefficient, Exponent)) -> bool {
        self.terms.get(exponent) == Some(coefficient)
    }
    pub fn is_constant(&self) -> bool {
        self.degree() == 0
    }
    pub fn constant_value(&self) -> Option<&Coefficient> {
        if self.is_constant() {
            self.terms.get(0)
        } else {
            None
        }
    }
    pub fn set_term<C: IntoCoefficient>(&mut self, exponent: Exponent, coefficient: C) {
        self.terms.set(exponent, coefficient.into_coefficient());
    }
    pub fn add_term<C: IntoCoefficient>(&mut self, coefficient: C, exponent: Exponent) {
        self.terms.add_term(coefficient.into_coefficient(), exponent);
    }
    /// evaluates at `x` using Horner's rule over the sparse terms
    pub fn evaluate(&self, x: &Coefficient) -> Coefficient {
        let mut iter = self.terms().rev();
        let (leading, mut current) = iter
            .next()
            .unwrap_or_else(|| unreachable!("term store is never empty"));
        let mut retval = leading.clone();
        for (coefficient, exponent) in iter {
            retval *= num_traits::pow(x.clone(), (current - exponent) as usize);
            retval += coefficient;
            current = exponent;
        }
        retval * num_traits::pow(x.clone(), current as usize)
    }
    /// substitutes `x` for the variable, the result uses `x`'s variable and moduli
    pub fn checked_compose(&self, x: &Polynomial) -> Result<Polynomial> {
        let mut iter = self.terms().rev();
        let (leading, mut current) = iter
            .next()
            .unwrap_or_else(|| unreachable!("term store is never empty"));
        let mut retval = x.zero_like() + leading.clone();
        for (coefficient, exponent) in iter {
            retval = retval.checked_mul_poly(&x.pow_unreduced(current - exponent)?)?;
            retval += coefficient;
            current = exponent;
        }
        retval.checked_mul_poly(&x.pow_unreduced(current)?)
    }
    /// panicking form of [`checked_compose`](Self::checked_compose)
    pub fn compose(&self, x: &Polynomial) -> Polynomial {
        self.checked_compose(x)
            .expect("polynomial degree overflow")
    }
    /// evaluates at a number or composes with a polynomial
    pub fn call(&self, value: &Operand) -> Result<Operand> {
        Ok(match value {
            Operand::Number(x) => Operand::Number(self.evaluate(x)),
            Operand::Polynomial(x) => Operand::Polynomial(self.checked_compose(x)?),
        })
    }
}

impl<'a> PolynomialEval<Coefficient> for &'a Polynomial {
    fn eval(self, x: &Coefficient) -> Coefficient {
        self.evaluate(x)
    }
}

impl<'a> PolynomialEval<Polynomial> for &'a Polynomial {
    fn eval(self, x: &Polynomial) -> Polynomial {
        self.compose(x)
    }
}

impl FromStr for Polynomial {
    type Err = Error;
    fn from_str(input: &str) -> Result<Self> {
        Self::parse(input)
    }
}

impl<C: IntoCoefficient> FromIterator<(C, Exponent)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (C, Exponent)>>(iter: I) -> Self {
        let mut terms = TermStore::new();
        for (coefficient, exponent) in iter {
            terms.add_term(coefficient.into_coefficient(), exponent);
        }
        Self::from_store(terms)
    }
}

impl IntoIterator for Polynomial {
    type Item = (Coefficient, Exponent);
    type IntoIter = IntoTerms;
    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = (&'a Coefficient, Exponent);
    type IntoIter = Terms<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.terms()
    }
}

impl From<Coefficient> for Polynomial {
    fn from(value: Coefficient) -> Self {
        Self::constant(value)
    }
}

fn count_factor(mut value: BigInt, factor: u32) -> (BigInt, usize) {
    let factor = BigInt::from(factor);
    let mut count = 0;
    while !value.is_zero() && value.is_multiple_of(&factor) {
        value /= &factor;
        count += 1;
    }
    (value, count)
}

/// integers print as is, terminating fractions as decimals, others as `(n/d)`
struct DisplayCoefficient<'a>(&'a Coefficient);

impl fmt::Display for DisplayCoefficient<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.0;
        if value.is_integer() {
            return write!(f, "{}", value.numer());
        }
        let (rest, twos) = count_factor(value.denom().clone(), 2);
        let (rest, fives) = count_factor(rest, 5);
        if !rest.is_one() {
            return write!(f, "({}/{})", value.numer(), value.denom());
        }
        let digits = twos.max(fives);
        let scaled = value.abs() * BigRational::from_integer(num_traits::pow(BigInt::from(10), digits));
        let scaled = scaled.to_integer().to_string();
        let scaled = format!("{:0>width$}", scaled, width = digits + 1);
        let (integer_part, fraction_part) = scaled.split_at(scaled.len() - digits);
        if value.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}.{}", integer_part, fraction_part)
    }
}

/// Renders terms in descending degree, for example `2x^2 + 3x - 5`.
///
/// The output parses back to an equal polynomial only when every coefficient
/// is an integer or a terminating decimal. Other rationals print as `(n/d)`,
/// which the parser rejects since the grammar has no `/`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (index, (coefficient, exponent)) in self.terms().rev().enumerate() {
            if index == 0 {
                write!(f, "{}", DisplayCoefficient(coefficient))?;
            } else if Sign::new(coefficient) == Some(Sign::Negative) {
                write!(f, " - {}", DisplayCoefficient(&-coefficient))?;
            } else {
                write!(f, " + {}", DisplayCoefficient(coefficient))?;
            }
            match exponent {
                0 => {}
                1 => write!(f, "{}", self.variable)?,
                _ => write!(f, "{}^{}", self.variable, exponent)?,
            }
        }
        Ok(())
    }
}
