use crate::error::EvalError;

const OPERATORS: &str = "+-*/";

/// Display form of a result: `14`, `0.5`, `-2.25`.
pub fn format_result(value: f64) -> String {
    format!("{}", value)
}

/// The expression being typed, with the editing rules of a pocket calculator.
///
/// This is plain caller-owned state; evaluation itself goes through
/// [`crate::evaluate_expression`] and keeps nothing between calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBuffer {
    input: String,
    last_result: Option<f64>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// What a display would show, `0` for an empty buffer.
    pub fn display(&self) -> &str {
        if self.input.is_empty() { "0" } else { &self.input }
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Type one key. Returns false when the key was ignored.
    pub fn push(&mut self, key: char) -> bool {
        let last = self.input.chars().last();
        if OPERATORS.contains(key) {
            match last {
                // only a sign may start an expression
                None if key != '-' => return false,
                Some(prev) if OPERATORS.contains(prev) => {
                    self.input.pop();
                }
                _ => (),
            }
            self.input.push(key);
            return true;
        }
        match key {
            '.' if last == Some('.') => false,
            '0'..='9' if self.input == "0" => {
                self.input.clear();
                self.input.push(key);
                true
            }
            '0'..='9' | '.' => {
                self.input.push(key);
                true
            }
            _ => false,
        }
    }

    /// Type a sequence of keys, returns how many were accepted.
    pub fn push_str(&mut self, keys: &str) -> usize {
        keys.chars().filter(|&k| self.push(k)).count()
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.last_result = None;
    }

    /// Evaluate the buffer. On success the buffer is replaced by the result
    /// so typing can continue from it; on failure the buffer is cleared.
    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        if self.input.is_empty() {
            return Err(EvalError::IncompleteExpression);
        }
        match crate::evaluate_expression(&self.input) {
            Ok(result) => {
                self.last_result = Some(result);
                self.input = format_result(result);
                Ok(result)
            }
            Err(e) => {
                tracing::debug!(input = %self.input, error = %e, "discarding input");
                self.input.clear();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_operators() {
        let mut buf = InputBuffer::new();
        assert!(!buf.push('*'));
        assert!(!buf.push('+'));
        assert!(!buf.push('/'));
        assert_eq!(buf.display(), "0");
        assert!(buf.push('-'));
        assert!(buf.push('5'));
        assert_eq!(buf.as_str(), "-5");
    }

    #[test]
    fn operator_replaces_operator() {
        let mut buf = InputBuffer::new();
        assert_eq!(buf.push_str("3+*-2"), 5);
        assert_eq!(buf.as_str(), "3-2");
    }

    #[test]
    fn digit_replaces_lone_zero() {
        let mut buf = InputBuffer::new();
        buf.push_str("07");
        assert_eq!(buf.as_str(), "7");
        buf.clear();
        buf.push_str("0.07");
        assert_eq!(buf.as_str(), "0.07");
        buf.clear();
        buf.push_str("10+0");
        assert_eq!(buf.as_str(), "10+0");
    }

    #[test]
    fn ignores_repeated_dots_and_junk() {
        let mut buf = InputBuffer::new();
        assert_eq!(buf.push_str("1..5a =2"), 4);
        assert_eq!(buf.as_str(), "1.52");
    }

    #[test]
    fn backspace_and_clear() {
        let mut buf = InputBuffer::new();
        buf.push_str("12+");
        buf.backspace();
        assert_eq!(buf.as_str(), "12");
        buf.backspace();
        buf.backspace();
        buf.backspace();
        assert!(buf.is_empty());
        assert_eq!(buf.display(), "0");
    }

    #[test]
    fn evaluate_replaces_input() {
        let mut buf = InputBuffer::new();
        buf.push_str("10/2*3-1");
        assert_eq!(buf.evaluate(), Ok(14.0));
        assert_eq!(buf.as_str(), "14");
        assert_eq!(buf.last_result(), Some(14.0));
        // keep typing from the result
        buf.push_str("/4");
        assert_eq!(buf.evaluate(), Ok(3.5));
        assert_eq!(buf.display(), "3.5");
        buf.clear();
        assert_eq!(buf.last_result(), None);
    }

    #[test]
    fn evaluate_errors_reset_input() {
        let mut buf = InputBuffer::new();
        assert_eq!(buf.evaluate(), Err(EvalError::IncompleteExpression));

        buf.push_str("5/0");
        assert_eq!(buf.evaluate(), Err(EvalError::NonFiniteResult(f64::INFINITY)));
        assert!(buf.is_empty());

        buf.push_str("3+");
        assert_eq!(buf.evaluate(), Err(EvalError::IncompleteExpression));
        assert!(buf.is_empty());

        buf.push_str("1.2.3");
        assert_eq!(buf.as_str(), "1.2.3");
        assert!(matches!(buf.evaluate(), Err(EvalError::MalformedExpression(_))));
        assert_eq!(buf.last_result(), None);
    }

    #[test]
    fn negative_results_continue() {
        let mut buf = InputBuffer::new();
        buf.push_str("2-5");
        assert_eq!(buf.evaluate(), Ok(-3.0));
        buf.push_str("*2");
        assert_eq!(buf.evaluate(), Ok(-6.0));
    }
}
