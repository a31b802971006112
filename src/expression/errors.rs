use thiserror::Error;

/// Errors that can occur during expression evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Complex result from negative base with fractional exponent")]
    ComplexResult,
    #[error("Numeric overflow")]
    Overflow,
}
