// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Sparse single-variable polynomials over exact rationals, an infix
//! expression parser that produces them, and a few number-theory and
//! linear-algebra helpers that work alongside.
//!
//! ```
//! use polykit::prelude::*;
//!
//! let p = Polynomial::parse("x(x+1)").unwrap();
//! let q = Polynomial::parse("x - 1").unwrap();
//! assert_eq!((&p * &q).to_string(), "1x^3 - 1x");
//! assert_eq!((&p % &q).to_string(), "2");
//! ```

pub mod array2d;
pub mod cache;
pub mod error;
pub mod factorizer;
pub mod matrix;
pub mod operand;
pub mod parser;
pub mod polynomial;
pub mod prelude;
pub mod traits;
pub mod util;

pub use crate::{
    cache::MruCache,
    error::{Error, Result},
    factorizer::Factorizer,
    matrix::Matrix,
    operand::Operand,
    parser::ParseOptions,
    polynomial::{Coefficient, Exponent, Polynomial},
};
