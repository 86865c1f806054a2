use crate::error::EvalError;
use lexers::{CalcToken, CalcTokenizer};
use std::ops::Deref;

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
}

pub fn precedence(op: char) -> (usize, Assoc) {
    match op {
        '+' | '-' => (1, Assoc::Left),
        '*' | '/' => (2, Assoc::Left),
        _ => (0, Assoc::Left),
    }
}

/// Split `expr` into tokens, rejecting anything outside `0-9 . + - * /`.
pub fn tokenize(expr: &str) -> Result<Vec<CalcToken>, EvalError> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    for token in CalcTokenizer::new(expr.chars()) {
        if let CalcToken::Unknown(ref lexeme) = token {
            let ch = lexeme.chars().next().unwrap_or_default();
            return Err(EvalError::InvalidCharacter { ch, pos });
        }
        pos += token.width();
        tokens.push(token);
    }
    Ok(tokens)
}

/// Tokens in postfix order.
#[derive(PartialEq, Debug)]
pub struct RPNExpr(pub Vec<CalcToken>);

impl Deref for RPNExpr {
    type Target = [CalcToken];
    fn deref(&self) -> &[CalcToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, EvalError> {
        Self::parse(tokenize(expr)?)
    }

    pub fn parse(tokens: impl IntoIterator<Item = CalcToken>) -> Result<RPNExpr, EvalError> {
        let mut out: Vec<CalcToken> = Vec::new();
        let mut stack: Vec<CalcToken> = Vec::new();

        for token in tokens {
            match token {
                CalcToken::Number(ref text) => {
                    if text.parse::<f64>().is_err() {
                        return Err(EvalError::MalformedExpression(
                            format!("bad number '{}'", text)));
                    }
                    out.push(token);
                }
                CalcToken::Op(op) => {
                    let (prec_rhs, _) = precedence(op);
                    while let Some(&CalcToken::Op(top)) = stack.last() {
                        let (prec_lhs, _) = precedence(top);
                        if prec_lhs < prec_rhs {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(token);
                }
                CalcToken::Unknown(lexeme) => return Err(EvalError::UnknownToken(lexeme)),
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                CalcToken::Op(_) => out.push(top),
                other => return Err(EvalError::MalformedExpression(
                    format!("unbalanced operator stack at '{}'", other))),
            }
        }
        tracing::debug!(rpn = %RPNExpr::postfix_of(&out), "converted to postfix");
        Ok(RPNExpr(out))
    }
}
