// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

/// Errors produced while parsing expressions or doing arithmetic.
///
/// Every error is fatal to the operation that raised it; operands are left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("mismatched parentheses at position {position}")]
    MismatchedParentheses { position: usize },
    #[error("unknown character {character:?} at position {position}")]
    UnknownCharacter { character: char, position: usize },
    #[error("malformed number literal at position {position}")]
    MalformedNumber { position: usize },
    #[error("unknown identifier {name:?} at position {position}")]
    UnknownIdentifier { name: String, position: usize },
    #[error("missing operand at position {position}")]
    MissingOperand { position: usize },
    #[error("invalid term: {reason}")]
    InvalidTerm { reason: &'static str },
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid exponent {exponent}: only non-negative integer powers are supported")]
    InvalidExponent { exponent: String },
    #[error("dimension mismatch: {lhs:?} is incompatible with {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("matrix of dimension {rows}x{cols} is not square")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is singular")]
    Singular,
    #[error("expected a positive integer")]
    NotPositive,
    #[error("no input provided")]
    EmptyInput,
    #[error("invalid digit base {base}")]
    InvalidBase { base: u64 },
    #[error("{operation} overflowed")]
    Overflow { operation: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
