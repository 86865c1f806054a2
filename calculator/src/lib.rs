extern crate lexers;

pub use parser::tokenize;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;

pub mod parser;

pub use self::error::{ErrorKind, EvalError};
pub use self::input::{format_result, InputBuffer};
pub use self::rpneval::eval;

mod error;
mod input;
mod rpnprint;
mod rpneval;

/// Evaluate a flat arithmetic expression such as `10/2*3-1`.
///
/// Empty input and input ending in an operator are rejected up front, and so
/// is any result that isn't a finite number (division by zero, overflow).
pub fn evaluate_expression(expr: &str) -> Result<f64, EvalError> {
    match expr.chars().last() {
        None => return Err(EvalError::IncompleteExpression),
        Some(c) if "+-*/".contains(c) => return Err(EvalError::IncompleteExpression),
        _ => (),
    }
    let rpn = ShuntingParser::parse_str(expr)?;
    let result = eval(&rpn)?;
    if !result.is_finite() {
        return Err(EvalError::NonFiniteResult(result));
    }
    tracing::debug!(expr, result, "evaluated");
    Ok(result)
}
