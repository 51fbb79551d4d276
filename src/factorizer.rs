// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Integer factorization by trial division and the arithmetic functions
//! derived from it.

use crate::{
    cache::{MruCache, DEFAULT_CAPACITY},
    error::{Error, Result},
};
use log::debug;
use num_integer::Integer;

/// `(prime, exponent)` pairs in ascending prime order
pub type Factorization = Vec<(u64, u32)>;

fn trial_division(mut n: u64) -> Factorization {
    let mut factors = Factorization::new();
    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            let mut exponent = 0;
            while n % divisor == 0 {
                n /= divisor;
                exponent += 1;
            }
            factors.push((divisor, exponent));
        }
        divisor += if divisor == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let modulus = u128::from(modulus);
    let mut base = u128::from(base) % modulus;
    let mut retval = 1 % modulus;
    while exponent != 0 {
        if exponent & 1 != 0 {
            retval = retval * base % modulus;
        }
        base = base * base % modulus;
        exponent >>= 1;
    }
    retval as u64
}

fn check_positive(n: u64) -> Result<u64> {
    if n == 0 {
        Err(Error::NotPositive)
    } else {
        Ok(n)
    }
}

/// Factors positive integers, remembering recent results in an [`MruCache`].
#[derive(Clone, Debug)]
pub struct Factorizer {
    cache: MruCache<Factorization>,
}

impl Default for Factorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Factorizer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_cache(MruCache::new(capacity))
    }
    pub fn with_cache(cache: MruCache<Factorization>) -> Self {
        Self { cache }
    }
    pub fn cache(&self) -> &MruCache<Factorization> {
        &self.cache
    }
    pub fn clear_memory(&mut self) {
        self.cache.clear();
    }
    /// ```
    /// use polykit::Factorizer;
    ///
    /// let mut factorizer = Factorizer::new();
    /// assert_eq!(factorizer.factor(360).unwrap(), [(2, 3), (3, 2), (5, 1)]);
    /// assert!(factorizer.factor(1).unwrap().is_empty());
    /// ```
    pub fn factor(&mut self, n: u64) -> Result<Factorization> {
        check_positive(n)?;
        if let Some(factors) = self.cache.get(n) {
            debug!("factor cache hit for {}", n);
            return Ok(factors.clone());
        }
        debug!("factor cache miss for {}", n);
        let factors = trial_division(n);
        self.cache.insert(n, factors.clone());
        Ok(factors)
    }
    pub fn gcd(values: &[u64]) -> Result<u64> {
        let (first, rest) = values.split_first().ok_or(Error::EmptyInput)?;
        Ok(rest.iter().fold(*first, |retval, value| retval.gcd(value)))
    }
    /// fails with [`Error::Overflow`] when the result does not fit in a `u64`
    pub fn lcm(values: &[u64]) -> Result<u64> {
        let (first, rest) = values.split_first().ok_or(Error::EmptyInput)?;
        rest.iter().try_fold(*first, |retval, &value| {
            if retval == 0 || value == 0 {
                return Ok(0);
            }
            (retval / retval.gcd(&value))
                .checked_mul(value)
                .ok_or(Error::Overflow { operation: "lcm" })
        })
    }
    pub fn euler_phi(&mut self, n: u64) -> Result<u64> {
        Ok(self
            .factor(n)?
            .into_iter()
            .map(|(prime, exponent)| prime.pow(exponent - 1) * (prime - 1))
            .product())
    }
    /// product of the distinct prime factors
    pub fn radical(&mut self, n: u64) -> Result<u64> {
        Ok(self.factor(n)?.into_iter().map(|(prime, _)| prime).product())
    }
    pub fn divisor_count(&mut self, n: u64) -> Result<u64> {
        Ok(self
            .factor(n)?
            .into_iter()
            .map(|(_, exponent)| u64::from(exponent) + 1)
            .product())
    }
    pub fn divisor_sum(&mut self, n: u64) -> Result<u128> {
        Ok(self
            .factor(n)?
            .into_iter()
            .map(|(prime, exponent)| {
                let prime = u128::from(prime);
                (prime.pow(exponent + 1) - 1) / (prime - 1)
            })
            .product())
    }
    pub fn is_square_free(&mut self, n: u64) -> Result<bool> {
        Ok(self.factor(n)?.iter().all(|&(_, exponent)| exponent == 1))
    }
    /// 0 unless square free, otherwise -1 for an odd number of primes and 1 for an even number
    pub fn mobius(&mut self, n: u64) -> Result<i8> {
        let factors = self.factor(n)?;
        if factors.iter().any(|&(_, exponent)| exponent > 1) {
            return Ok(0);
        }
        Ok(if factors.len() % 2 == 0 { 1 } else { -1 })
    }
    /// exponent of the multiplicative group modulo `n`
    pub fn carmichael(&mut self, n: u64) -> Result<u64> {
        let lambdas: Vec<u64> = self
            .factor(n)?
            .into_iter()
            .map(|(prime, exponent)| match (prime, exponent) {
                (2, 1) => 1,
                (2, 2) => 2,
                (2, _) => 1 << (exponent - 2),
                _ => prime.pow(exponent - 1) * (prime - 1),
            })
            .collect();
        if lambdas.is_empty() {
            return Ok(1);
        }
        // divides euler_phi(n), so it cannot overflow
        Self::lcm(&lambdas)
    }
    /// the least `k > 0` with `a^k = 1 (mod m)`, `None` when `a` is not invertible
    pub fn multiplicative_order(&mut self, a: u64, m: u64) -> Result<Option<u64>> {
        check_positive(m)?;
        if a.gcd(&m) != 1 {
            return Ok(None);
        }
        if m == 1 {
            return Ok(Some(1));
        }
        // the order divides the carmichael function, strip primes while it still works
        let mut order = self.carmichael(m)?;
        for (prime, _) in self.factor(order)? {
            while order % prime == 0 && pow_mod(a, order / prime, m) == 1 {
                order /= prime;
            }
        }
        Ok(Some(order))
    }
    pub fn digit_sum(n: u64, base: u64) -> Result<u64> {
        if base < 2 {
            return Err(Error::InvalidBase { base });
        }
        let mut n = n;
        let mut retval = 0;
        while n != 0 {
            let (quotient, digit) = n.div_rem(&base);
            retval += digit;
            n = quotient;
        }
        Ok(retval)
    }
}
