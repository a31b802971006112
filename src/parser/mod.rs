//! Recursive-descent parser for the restricted arithmetic grammar

mod core;
mod errors;
mod token;

pub use core::parse;
pub use errors::ParseError;
pub use token::{Token, tokenize};
