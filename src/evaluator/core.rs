use log::debug;

use crate::evaluator::errors::EvaluatorError;
use crate::expression::ExpressionError;
use crate::parser::parse;
use crate::sanitize::sanitize;

/// Sandboxed evaluator for untrusted arithmetic input
///
/// Stateless: every call sanitizes, parses and evaluates independently, so
/// a single instance may be shared freely across threads.
pub struct SafeEvaluator {}

impl SafeEvaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self {}
    }

    /// Evaluate raw input to a numeric value
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The sanitized input is not a well-formed arithmetic expression
    /// * Evaluation hits an arithmetic fault (division or modulo by zero,
    ///   complex result, overflow)
    /// * The final value is not a finite number
    pub fn evaluate(&self, raw: &str) -> Result<f64, EvaluatorError> {
        let cleaned = sanitize(raw);
        let expr = parse(&cleaned)?;
        let value = expr.evaluate()?;
        if !value.is_finite() {
            debug!("Result is not finite: {}", value);
            return Err(EvaluatorError::Math(ExpressionError::Overflow));
        }
        Ok(value)
    }

    /// Evaluate raw input and render the outcome as a plain string
    ///
    /// This is the tool-call boundary: the caller always receives a string,
    /// either the numeric result or a message prefixed with `"Error: "`.
    /// Nothing escapes as an error value.
    pub fn evaluate_to_string(&self, raw: &str) -> String {
        match self.evaluate(raw) {
            Ok(value) => format!("{}", value),
            Err(e) => format!("Error: {}", e),
        }
    }
}

impl Default for SafeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
