// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::{Error, Result},
    polynomial::{checked_float_coefficient, Coefficient, Polynomial, DEFAULT_VARIABLE},
    traits::IntoCoefficient,
};
use num_traits::Zero;
use std::collections::BTreeMap;

/// Settings for [`Polynomial::parse_with`].
///
/// ```
/// use polykit::{ParseOptions, Polynomial};
///
/// let options = ParseOptions::new().variable('t').constant("k", 3);
/// let p = Polynomial::parse_with("kt^2 - t", &options).unwrap();
/// assert_eq!(p.to_string(), "3t^2 - 1t");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    variable: char,
    constants: BTreeMap<String, Coefficient>,
    coefficient_modulus: Option<Coefficient>,
    polynomial_modulus: Option<Polynomial>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            variable: DEFAULT_VARIABLE,
            constants: BTreeMap::new(),
            coefficient_modulus: None,
            polynomial_modulus: None,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn variable(mut self, variable: char) -> Self {
        self.variable = variable;
        self
    }
    /// binds `name` to `value`; empty names are ignored
    ///
    /// Panics on a `(numerator, 0)` pair, see [`IntoCoefficient`].
    pub fn constant<C: IntoCoefficient>(mut self, name: impl Into<String>, value: C) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.constants.insert(name, value.into_coefficient());
        }
        self
    }
    pub fn float_constant(self, name: impl Into<String>, value: f64) -> Result<Self> {
        let value = checked_float_coefficient(value)?;
        Ok(self.constant(name, value))
    }
    pub fn coefficient_modulus<C: IntoCoefficient>(mut self, modulus: C) -> Result<Self> {
        let modulus = modulus.try_into_coefficient()?;
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.coefficient_modulus = Some(modulus);
        Ok(self)
    }
    pub fn polynomial_modulus(mut self, modulus: Polynomial) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.polynomial_modulus = Some(modulus);
        Ok(self)
    }
    pub fn get_variable(&self) -> char {
        self.variable
    }
    pub fn get_constant(&self, name: &str) -> Option<&Coefficient> {
        self.constants.get(name)
    }
    pub fn constants(&self) -> impl Iterator<Item = (&str, &Coefficient)> {
        self.constants
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
    pub fn get_coefficient_modulus(&self) -> Option<&Coefficient> {
        self.coefficient_modulus.as_ref()
    }
    pub fn get_polynomial_modulus(&self) -> Option<&Polynomial> {
        self.polynomial_modulus.as_ref()
    }
    /// the longest constant name that `input` starts with
    pub(crate) fn longest_constant(&self, input: &str) -> Option<(&str, &Coefficient)> {
        self.constants()
            .filter(|(name, _)| input.starts_with(name))
            .max_by_key(|(name, _)| name.len())
    }
    pub(crate) fn is_constant_start(&self, character: char) -> bool {
        self.constants
            .keys()
            .any(|name| name.starts_with(character))
    }
    /// applies the configured variable and moduli to a parsed value
    pub(crate) fn configure(&self, value: Polynomial) -> Result<Polynomial> {
        let mut value = value.with_variable(self.variable);
        if let Some(modulus) = &self.coefficient_modulus {
            value = value.with_coefficient_modulus(modulus)?;
        }
        if let Some(modulus) = &self.polynomial_modulus {
            value = value.with_polynomial_modulus(modulus.clone())?;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::new();
        assert_eq!(options.get_variable(), 'x');
        assert_eq!(options.constants().count(), 0);
        assert_eq!(options.get_coefficient_modulus(), None);
        assert_eq!(options.get_polynomial_modulus(), None);
    }

    #[test]
    fn test_constants() {
        let options = ParseOptions::new()
            .constant("a", 1)
            .constant("ab", 2)
            .constant("", 3)
            .float_constant("h", 0.5)
            .unwrap();
        assert_eq!(options.constants().count(), 3);
        assert_eq!(options.get_constant("h"), Some(&(1, 2).into_coefficient()));
        assert_eq!(
            options.longest_constant("abc"),
            Some(("ab", &2.into_coefficient()))
        );
        assert_eq!(
            options.longest_constant("ax"),
            Some(("a", &1.into_coefficient()))
        );
        assert_eq!(options.longest_constant("x"), None);
        assert!(options.is_constant_start('a'));
        assert!(!options.is_constant_start('b'));
        assert!(matches!(
            ParseOptions::new().float_constant("inf", f64::INFINITY),
            Err(Error::InvalidTerm { .. })
        ));
    }

    #[test]
    fn test_moduli() {
        assert_eq!(
            ParseOptions::new().coefficient_modulus(0),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            ParseOptions::new().coefficient_modulus((1, 0)),
            Err(Error::DivisionByZero)
        );
        assert_eq!(
            ParseOptions::new().polynomial_modulus(Polynomial::zero()),
            Err(Error::DivisionByZero)
        );
        let options = ParseOptions::new()
            .variable('y')
            .coefficient_modulus(7)
            .unwrap()
            .polynomial_modulus(Polynomial::term(1, 2))
            .unwrap();
        let value = options.configure(Polynomial::term(1, 1)).unwrap();
        assert_eq!(value.variable(), 'y');
        assert_eq!(value.coefficient_modulus(), Some(&7.into_coefficient()));
        assert_eq!(value.polynomial_modulus(), Some(&Polynomial::term(1, 2)));
    }
}
