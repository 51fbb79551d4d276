// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub use crate::{
    error::{Error, Result},
    operand::Operand,
    parser::ParseOptions,
    polynomial::{Coefficient, Polynomial},
    traits::{IntoCoefficient as _, PolynomialEval as _},
};
pub use num_traits::{
    CheckedAdd as _, CheckedDiv as _, CheckedMul as _, CheckedRem as _, CheckedSub as _, One as _,
    Pow as _, Zero as _,
};
