use crate::error::EvalError;
use crate::parser::RPNExpr;
use lexers::CalcToken;

fn parse_number(text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>()
        .map_err(|_| EvalError::MalformedExpression(format!("bad number '{}'", text)))
}

fn apply(op: char, l: f64, r: f64) -> Result<f64, EvalError> {
    match op {
        '+' => Ok(l + r),
        '-' => Ok(l - r),
        '*' => Ok(l * r),
        // x/0 is left to IEEE-754: inf, -inf or NaN
        '/' => Ok(l / r),
        _ => Err(EvalError::UnknownToken(op.to_string())),
    }
}

/// Reduce a postfix expression to a single value.
pub fn eval(rpn: &RPNExpr) -> Result<f64, EvalError> {
    let mut operands = Vec::new();

    for token in rpn.iter() {
        match *token {
            CalcToken::Number(ref text) => operands.push(parse_number(text)?),
            CalcToken::Op(op) => {
                let r = operands.pop().ok_or(EvalError::StackUnderflow)?;
                let l = operands.pop().ok_or(EvalError::StackUnderflow)?;
                operands.push(apply(op, l, r)?);
            }
            CalcToken::Unknown(ref lexeme) => return Err(EvalError::UnknownToken(lexeme.clone())),
        }
    }
    match operands.len() {
        0 => Err(EvalError::EmptyExpression),
        1 => Ok(operands[0]),
        n => Err(EvalError::TrailingOperands(n)),
    }
}
