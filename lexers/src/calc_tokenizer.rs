#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

static NUMERIC: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
static OPERATORS: &[char] = &['+', '-', '*', '/'];
static SIGNS: &[char] = &['+', '-'];

/// A lexeme of a flat arithmetic expression.
///
/// Numbers keep their source text: a run like `1.2.3` is still one number
/// and it's up to the parser to reject it.
#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Unknown(String),
    Number(String),
    Op(char),
}

impl CalcToken {
    pub fn is_operator(&self) -> bool {
        matches!(*self, CalcToken::Op(_))
    }

    /// Characters of source text this token covers.
    pub fn width(&self) -> usize {
        match *self {
            CalcToken::Unknown(ref s) | CalcToken::Number(ref s) => s.chars().count(),
            CalcToken::Op(_) => 1,
        }
    }
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CalcToken::Unknown(ref s) | CalcToken::Number(ref s) => write!(f, "{}", s),
            CalcToken::Op(op) => write!(f, "{}", op),
        }
    }
}

pub struct CalcTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<CalcToken>,
}

impl<I: Iterator<Item=char>> CalcTokenizer<I> {
    pub fn new(source: I) -> Self {
        CalcTokenizer{src: Scanner::new(source), prev: None}
    }

    // only the very first token may carry a sign
    fn takes_sign(prev: &Option<CalcToken>) -> bool {
        prev.is_none()
    }

    fn scan_signed_number(&mut self) -> Option<String> {
        let backtrack = self.src.buffer_pos();
        self.src.accept_any(SIGNS)?;
        if self.src.skip_all(NUMERIC) {
            return Some(self.src.extract_string());
        }
        self.src.set_buffer_pos(backtrack);
        None
    }

    fn get_token(&mut self) -> Option<CalcToken> {
        if Self::takes_sign(&self.prev) {
            if let Some(num) = self.scan_signed_number() {
                return Some(CalcToken::Number(num));
            }
        }
        if self.src.skip_all(NUMERIC) {
            Some(CalcToken::Number(self.src.extract_string()))
        } else if let Some(op) = self.src.accept_any(OPERATORS) {
            self.src.ignore();
            Some(CalcToken::Op(op))
        } else if self.src.next().is_some() {
            Some(CalcToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.get_token();
        tracing::trace!(?token, "scanned");
        self.prev = token.clone();
        token
    }
}

///////////////////////////////////////////////////////////////////////////////
