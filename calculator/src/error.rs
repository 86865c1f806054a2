use thiserror::Error;

/// Everything that can go wrong turning a string into a number.
///
/// None of these are fatal: the caller is expected to report the message
/// and reset whatever input state it keeps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("Incomplete expression")]
    IncompleteExpression,

    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Unknown token: {0}")]
    UnknownToken(String),

    #[error("Missing operand")]
    StackUnderflow,

    #[error("Missing operator, {0} values left over")]
    TrailingOperands(usize),

    #[error("Empty expression")]
    EmptyExpression,

    /// Division by zero or overflow.
    #[error("Result is not a finite number ({0})")]
    NonFiniteResult(f64),
}

/// Class of an [`EvalError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    IncompleteExpression,
    MalformedExpression,
    UnknownToken,
    StackUnderflow,
    TrailingOperands,
    EmptyExpression,
    NonFiniteResult,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            EvalError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            EvalError::IncompleteExpression => ErrorKind::IncompleteExpression,
            EvalError::MalformedExpression(_) => ErrorKind::MalformedExpression,
            EvalError::UnknownToken(_) => ErrorKind::UnknownToken,
            EvalError::StackUnderflow => ErrorKind::StackUnderflow,
            EvalError::TrailingOperands(_) => ErrorKind::TrailingOperands,
            EvalError::EmptyExpression => ErrorKind::EmptyExpression,
            EvalError::NonFiniteResult(_) => ErrorKind::NonFiniteResult,
        }
    }
}
