//! Top-level sanitize-parse-evaluate pipeline

mod core;
mod errors;

pub use core::SafeEvaluator;
pub use errors::EvaluatorError;
