use thiserror::Error;

use crate::parser::token::Token;

/// Errors that can occur while tokenizing or parsing an expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Invalid numeric literal: {0}")]
    InvalidNumber(String),
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
    #[error("Unexpected token: {0}")]
    UnexpectedToken(Token),
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unbalanced parentheses")]
    UnbalancedParens,
    #[error("Expression is nested too deeply")]
    TooDeeplyNested,
}
