//! Safecalc - Sandboxed evaluation of untrusted arithmetic expressions
//!
//! This library safely evaluates arithmetic text supplied by an untrusted
//! caller, such as an LLM agent tool invocation. Safety comes from two
//! layers: input is first stripped down to a whitelist of arithmetic
//! characters, then parsed by a grammar whose AST can only represent
//! numeric literals, six binary operators and unary sign. There is nothing
//! to inject into: function calls and names are not expressible.

pub mod evaluator;
pub mod expression;
pub mod parser;
pub mod sanitize;

// Re-export the main public API
pub use evaluator::{EvaluatorError, SafeEvaluator};
pub use expression::{Expression, ExpressionError};
pub use parser::{ParseError, parse};
pub use sanitize::sanitize;

/// Evaluate untrusted arithmetic input, returning the outcome as a string
///
/// This is a convenience function matching the tool-call convention of the
/// surrounding orchestration layer: the result is always a plain string,
/// either the numeric value or a message prefixed with `"Error: "`. Use
/// [`SafeEvaluator::evaluate`] for a typed result instead.
///
/// # Examples
///
/// ```
/// use safecalc::evaluate;
///
/// assert_eq!(evaluate("2 + 2"), "4");
/// assert_eq!(evaluate("10 / 4"), "2.5");
/// assert_eq!(evaluate("(1 + 2) * 3"), "9");
/// assert!(evaluate("1/0").starts_with("Error: "));
/// ```
pub fn evaluate(raw: &str) -> String {
    SafeEvaluator::new().evaluate_to_string(raw)
}
