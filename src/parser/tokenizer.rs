// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    error::{Error, Result},
    parser::ParseOptions,
    polynomial::Coefficient,
};
use num_bigint::BigInt;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TokenKind {
    /// a decimal literal, stored exactly
    Number(Coefficient),
    /// the polynomial's variable symbol
    Variable,
    /// a named constant, resolved to its value
    Constant(Coefficient),
    Plus,
    Minus,
    Star,
    Percent,
    Caret,
    OpenParen,
    CloseParen,
}

impl TokenKind {
    /// tokens that get an implicit `*` in front when they follow a value
    pub(crate) fn starts_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_) | TokenKind::Variable | TokenKind::Constant(_) | TokenKind::OpenParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Variable => write!(f, "<var>"),
            TokenKind::Constant(value) => write!(f, "<{}>", value),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Percent => write!(f, "%"),
            TokenKind::Caret => write!(f, "^"),
            TokenKind::OpenParen => write!(f, "("),
            TokenKind::CloseParen => write!(f, ")"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    /// byte offset of the token's first character
    pub(crate) position: usize,
}

pub(crate) fn tokenize(input: &str, options: &ParseOptions) -> Result<Vec<Token>> {
    let mut tokenizer = Tokenizer {
        input,
        options,
        position: 0,
        output: Vec::new(),
    };
    tokenizer.scan()?;
    Ok(tokenizer.output)
}

struct Tokenizer<'a> {
    input: &'a str,
    options: &'a ParseOptions,
    position: usize,
    output: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }
    fn push(&mut self, kind: TokenKind, position: usize) {
        self.output.push(Token { kind, position });
    }
    fn scan(&mut self) -> Result<()> {
        while let Some(c) = self.peek() {
            let start = self.position;
            match c {
                ' ' => self.position += 1,
                '0'..='9' | '.' => {
                    let value = self.scan_number()?;
                    self.push(TokenKind::Number(value), start);
                }
                _ => {
                    let kind = match c {
                        '+' => TokenKind::Plus,
                        '-' => TokenKind::Minus,
                        '*' => TokenKind::Star,
                        '%' => TokenKind::Percent,
                        '^' => TokenKind::Caret,
                        '(' => TokenKind::OpenParen,
                        ')' => TokenKind::CloseParen,
                        _ => self.scan_identifier(c)?,
                    };
                    if self.position == start {
                        self.position += c.len_utf8();
                    }
                    self.push(kind, start);
                }
            }
        }
        Ok(())
    }
    // digits with at most one decimal point
    fn scan_number(&mut self) -> Result<Coefficient> {
        let start = self.position;
        let mut digits = String::new();
        let mut fraction_digits: Option<usize> = None;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {
                    digits.push(c);
                    if let Some(count) = &mut fraction_digits {
                        *count += 1;
                    }
                }
                '.' if fraction_digits.is_some() => {
                    return Err(Error::MalformedNumber {
                        position: self.position,
                    })
                }
                '.' => fraction_digits = Some(0),
                _ => break,
            }
            self.position += 1;
        }
        let numer: BigInt = digits
            .parse()
            .map_err(|_| Error::MalformedNumber { position: start })?;
        let denom = num_traits::pow(BigInt::from(10), fraction_digits.unwrap_or(0));
        Ok(Coefficient::new(numer, denom))
    }
    // named constants win over the variable symbol
    fn scan_identifier(&mut self, c: char) -> Result<TokenKind> {
        let start = self.position;
        if let Some((name, value)) = self.options.longest_constant(self.rest()) {
            self.position += name.len();
            return Ok(TokenKind::Constant(value.clone()));
        }
        if c == self.options.get_variable() {
            return Ok(TokenKind::Variable);
        }
        if self.options.is_constant_start(c) {
            let name: String = self
                .rest()
                .chars()
                .take_while(|c| c.is_alphanumeric())
                .collect();
            return Err(Error::UnknownIdentifier {
                name,
                position: start,
            });
        }
        Err(Error::UnknownCharacter {
            character: c,
            position: start,
        })
    }
}
