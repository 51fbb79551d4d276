// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Infix expression parsing.
//!
//! The input is tokenized first, then reduced with a shunting-yard loop that
//! tracks whether it expects an operand or has just seen one. Seeing a value
//! where an operator was expected inserts an implicit `*`.

use crate::{
    error::{Error, Result},
    operand::Operand,
    polynomial::Polynomial,
};
use log::trace;

mod options;
mod tokenizer;

pub use options::ParseOptions;
use tokenizer::{tokenize, Token, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Sum,
    Product,
    Prefix,
    Power,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Remainder,
    Power,
    Negate,
}

impl Operator {
    fn precedence(self) -> Precedence {
        match self {
            Operator::Add | Operator::Subtract => Precedence::Sum,
            Operator::Multiply | Operator::Remainder => Precedence::Product,
            Operator::Negate => Precedence::Prefix,
            Operator::Power => Precedence::Power,
        }
    }
    fn apply(self, values: &mut Vec<Operand>, position: usize) -> Result<()> {
        let missing = || Error::MissingOperand { position };
        let rhs = values.pop().ok_or_else(missing)?;
        let value = if self == Operator::Negate {
            -rhs
        } else {
            let lhs = values.pop().ok_or_else(missing)?;
            match self {
                Operator::Add => lhs + rhs,
                Operator::Subtract => lhs - rhs,
                Operator::Multiply => lhs.checked_mul(rhs)?,
                Operator::Remainder => lhs.checked_rem(rhs)?,
                Operator::Power => lhs.checked_pow(rhs)?,
                Operator::Negate => unreachable!(),
            }
        };
        trace!("applied {:?} at {}: {}", self, position, value);
        values.push(value);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
enum StackEntry {
    Operator(Operator, usize),
    OpenParen(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    ExpectOperand,
    AfterOperand,
}

struct Parser<'a> {
    options: &'a ParseOptions,
    values: Vec<Operand>,
    stack: Vec<StackEntry>,
    state: State,
}

impl<'a> Parser<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            values: Vec::new(),
            stack: Vec::new(),
            state: State::ExpectOperand,
        }
    }
    /// applies stacked operators binding at least as tightly as `precedence`
    fn reduce(&mut self, precedence: Precedence) -> Result<()> {
        while let Some(&StackEntry::Operator(operator, position)) = self.stack.last() {
            if operator.precedence() < precedence {
                break;
            }
            self.stack.pop();
            operator.apply(&mut self.values, position)?;
        }
        Ok(())
    }
    fn push_binary(&mut self, operator: Operator, position: usize) -> Result<()> {
        self.reduce(operator.precedence())?;
        self.stack.push(StackEntry::Operator(operator, position));
        self.state = State::ExpectOperand;
        Ok(())
    }
    fn push_value(&mut self, value: Operand) {
        self.values.push(value);
        self.state = State::AfterOperand;
    }
    fn close_paren(&mut self, position: usize) -> Result<()> {
        loop {
            match self.stack.pop() {
                Some(StackEntry::Operator(operator, operator_position)) => {
                    operator.apply(&mut self.values, operator_position)?
                }
                Some(StackEntry::OpenParen(_)) => break,
                None => return Err(Error::MismatchedParentheses { position }),
            }
        }
        self.state = State::AfterOperand;
        Ok(())
    }
    fn step(&mut self, Token { kind, position }: Token) -> Result<()> {
        if self.state == State::AfterOperand && kind.starts_value() {
            self.push_binary(Operator::Multiply, position)?;
        }
        match (kind, self.state) {
            (TokenKind::Number(value), _) | (TokenKind::Constant(value), _) => {
                self.push_value(Operand::Number(value));
            }
            (TokenKind::Variable, _) => {
                let variable = Polynomial::term(1, 1).with_variable(self.options.get_variable());
                self.push_value(Operand::Polynomial(variable));
            }
            (TokenKind::OpenParen, _) => {
                self.stack.push(StackEntry::OpenParen(position));
                self.state = State::ExpectOperand;
            }
            (TokenKind::CloseParen, state) => {
                if !self
                    .stack
                    .iter()
                    .any(|entry| matches!(entry, StackEntry::OpenParen(_)))
                {
                    return Err(Error::MismatchedParentheses { position });
                }
                if state == State::ExpectOperand {
                    return Err(Error::MissingOperand { position });
                }
                self.close_paren(position)?;
            }
            (TokenKind::Plus, State::ExpectOperand) => {}
            (TokenKind::Minus, State::ExpectOperand) => {
                self.stack.push(StackEntry::Operator(Operator::Negate, position));
            }
            (TokenKind::Star, State::ExpectOperand)
            | (TokenKind::Percent, State::ExpectOperand)
            | (TokenKind::Caret, State::ExpectOperand) => {
                return Err(Error::MissingOperand { position });
            }
            (TokenKind::Plus, State::AfterOperand) => self.push_binary(Operator::Add, position)?,
            (TokenKind::Minus, State::AfterOperand) => {
                self.push_binary(Operator::Subtract, position)?
            }
            (TokenKind::Star, State::AfterOperand) => {
                self.push_binary(Operator::Multiply, position)?
            }
            (TokenKind::Percent, State::AfterOperand) => {
                self.push_binary(Operator::Remainder, position)?
            }
            (TokenKind::Caret, State::AfterOperand) => self.push_binary(Operator::Power, position)?,
        }
        Ok(())
    }
    fn finish(mut self, end: usize) -> Result<Operand> {
        if self.state == State::ExpectOperand {
            return Err(Error::MissingOperand { position: end });
        }
        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Operator(operator, position) => {
                    operator.apply(&mut self.values, position)?
                }
                StackEntry::OpenParen(position) => {
                    return Err(Error::MismatchedParentheses { position })
                }
            }
        }
        let value = self
            .values
            .pop()
            .ok_or(Error::MissingOperand { position: end })?;
        debug_assert!(self.values.is_empty());
        Ok(value)
    }
}

/// parses `input` into a polynomial in `options`' variable, carrying its moduli
pub fn parse(input: &str, options: &ParseOptions) -> Result<Polynomial> {
    let mut parser = Parser::new(options);
    for token in tokenize(input, options)? {
        parser.step(token)?;
    }
    let value = parser.finish(input.len())?;
    options.configure(value.into_polynomial(options.get_variable()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::IntoCoefficient;
    use num_traits::Zero;

    fn poly(terms: &[(i64, u32)]) -> Polynomial {
        terms.iter().copied().collect()
    }

    fn parse_default(input: &str) -> Result<Polynomial> {
        parse(input, &ParseOptions::default())
    }

    #[test]
    fn test_parse_canonical() {
        let p = parse_default("2x^2 + 3x - 5").unwrap();
        assert_eq!(p, poly(&[(2, 2), (3, 1), (-5, 0)]));
        assert_eq!(p.to_string(), "2x^2 + 3x - 5");
    }

    #[test]
    fn test_implicit_multiplication() {
        assert_eq!(parse_default("x(x+1)").unwrap(), poly(&[(1, 2), (1, 1)]));
        assert_eq!(parse_default("2x").unwrap(), poly(&[(2, 1)]));
        assert_eq!(parse_default("(x)(x)").unwrap(), poly(&[(1, 2)]));
        assert_eq!(parse_default("(x+1)2").unwrap(), poly(&[(2, 1), (2, 0)]));
        assert_eq!(parse_default("2 3").unwrap(), poly(&[(6, 0)]));
        // implicit `*` binds like an explicit one
        assert_eq!(parse_default("2x^3").unwrap(), poly(&[(2, 3)]));
        assert_eq!(parse_default("1 + 2x").unwrap(), poly(&[(2, 1), (1, 0)]));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(parse_default("1 + 2 * 3").unwrap(), poly(&[(7, 0)]));
        assert_eq!(parse_default("(1 + 2) * 3").unwrap(), poly(&[(9, 0)]));
        assert_eq!(parse_default("10 - 4 - 3").unwrap(), poly(&[(3, 0)]));
        assert_eq!(parse_default("2^3^2").unwrap(), poly(&[(64, 0)]));
        assert_eq!(parse_default("7 % 4 * 2").unwrap(), poly(&[(6, 0)]));
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(parse_default("-x^2").unwrap(), poly(&[(-1, 2)]));
        assert_eq!(parse_default("-2x").unwrap(), poly(&[(-2, 1)]));
        assert_eq!(parse_default("+x").unwrap(), poly(&[(1, 1)]));
        assert_eq!(parse_default("x - -1").unwrap(), poly(&[(1, 1), (1, 0)]));
        assert_eq!(parse_default("-(x + 1)").unwrap(), poly(&[(-1, 1), (-1, 0)]));
        assert_eq!(parse_default("-1x^3 + 1").unwrap(), poly(&[(-1, 3), (1, 0)]));
    }

    #[test]
    fn test_modulo() {
        assert_eq!(parse_default("2x^2 % 3").unwrap(), poly(&[(2, 2)]));
        let p = parse_default("4x^2 % 3").unwrap();
        assert_eq!(p, poly(&[(1, 2)]));
        assert_eq!(p.to_string(), "1x^2");
        // polynomial remainder when the right side is not constant
        assert_eq!(parse_default("(x^2 + 1) % (x - 1)").unwrap(), poly(&[(2, 0)]));
        assert_eq!(
            parse_default("x % 0"),
            Err(Error::DivisionByZero)
        );
    }

    #[test]
    fn test_decimals_are_exact() {
        let p = parse_default("0.1x + 0.2").unwrap();
        assert_eq!(p.coefficient(1), Some(&(1, 10).into_coefficient()));
        assert_eq!(p.to_string(), "0.1x + 0.2");
    }

    #[test]
    fn test_options() {
        let options = ParseOptions::new()
            .variable('t')
            .constant("pi", (355, 113))
            .constant("p", 2)
            .coefficient_modulus(5)
            .unwrap();
        let p = parse("pt + p", &options).unwrap();
        assert_eq!(p.variable(), 't');
        assert_eq!(p.coefficient_modulus(), Some(&5.into_coefficient()));
        assert_eq!(p, poly(&[(2, 1), (2, 0)]).with_variable('t'));
        let p = parse("pi", &options).unwrap();
        assert_eq!(p.constant_value(), Some(&(355, 113).into_coefficient()));
        assert_eq!(
            parse("x", &options),
            Err(Error::UnknownCharacter {
                character: 'x',
                position: 0
            })
        );
    }

    #[test]
    fn test_constant_result_uses_variable() {
        let options = ParseOptions::new().variable('z');
        let p = parse("3", &options).unwrap();
        assert_eq!(p.variable(), 'z');
        assert_eq!(p, Polynomial::constant(3).with_variable('z'));
        assert!(parse("0", &options).unwrap().is_zero());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_default("3..5x"),
            Err(Error::MalformedNumber { position: 2 })
        );
        assert_eq!(
            parse_default("(x+1"),
            Err(Error::MismatchedParentheses { position: 0 })
        );
        assert_eq!(
            parse_default("x+1)"),
            Err(Error::MismatchedParentheses { position: 3 })
        );
        assert_eq!(
            parse_default("x + y"),
            Err(Error::UnknownCharacter {
                character: 'y',
                position: 4
            })
        );
        assert_eq!(parse_default(""), Err(Error::MissingOperand { position: 0 }));
        assert_eq!(parse_default("2 +"), Err(Error::MissingOperand { position: 3 }));
        assert_eq!(parse_default("*3"), Err(Error::MissingOperand { position: 0 }));
        assert_eq!(parse_default("()"), Err(Error::MissingOperand { position: 1 }));
        assert!(matches!(
            parse_default("2^-1"),
            Err(Error::InvalidExponent { .. })
        ));
        assert!(matches!(
            parse_default("2^x"),
            Err(Error::InvalidExponent { .. })
        ));
        assert!(matches!(
            parse_default("x^0.5"),
            Err(Error::InvalidExponent { .. })
        ));
    }

    #[test]
    fn test_degree_overflow() {
        let overflow = Err(Error::Overflow {
            operation: "polynomial degree",
        });
        assert_eq!(parse_default("x^4000000000 * x^4000000000"), overflow);
        assert_eq!(parse_default("x^4000000000 x^300000000"), overflow);
        assert_eq!(parse_default("(x^70000 + 1)^70000"), overflow);
        assert_eq!(
            parse_default("x^4000000000 * x^294967295").unwrap(),
            poly(&[(1, u32::MAX)])
        );
    }
}
