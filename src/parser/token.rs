use std::fmt;

use log::debug;

use crate::parser::errors::ParseError;

/// Lexical tokens of the restricted arithmetic grammar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    Percent,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::DoubleStar => write!(f, "**"),
            Token::Slash => write!(f, "/"),
            Token::Percent => write!(f, "%"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Split a sanitized expression into tokens
///
/// A maximal run of digits and dots forms one numeric literal, so "1.2.3"
/// is rejected rather than read as two numbers. `**` lexes as a single
/// exponentiation token.
///
/// # Errors
///
/// This function will return an error if:
/// * A digit/dot run does not parse as a valid f64 literal
/// * A character outside the grammar is encountered (unreachable for
///   sanitized input)
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    debug!("Tokenizing: '{}'", input);

    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' => i += 1,
            b'0'..=b'9' | b'.' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                let text = &input[start..i];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(text.to_string()))?;
                tokens.push(Token::Number(value));
            }
            b'*' => {
                if bytes.get(i + 1) == Some(&b'*') {
                    tokens.push(Token::DoubleStar);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            b'+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            b'-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            b'/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            b'%' => {
                tokens.push(Token::Percent);
                i += 1;
            }
            b'(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            b')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            other => {
                return Err(ParseError::UnexpectedCharacter(char::from(other)));
            }
        }
    }

    debug!("Produced {} tokens", tokens.len());
    Ok(tokens)
}
