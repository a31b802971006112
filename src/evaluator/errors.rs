use thiserror::Error;

use crate::expression::ExpressionError;
use crate::parser::ParseError;

/// Errors surfaced by the top-level evaluator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluatorError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] ParseError),
    #[error("Math error: {0}")]
    Math(#[from] ExpressionError),
}
