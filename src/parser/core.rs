use log::debug;

use crate::expression::Expression;
use crate::parser::errors::ParseError;
use crate::parser::token::{Token, tokenize};

/// Maximum grammar recursion depth
///
/// Nested parentheses and chained unary signs each cost one level, so this
/// bounds both the parser's own stack and the depth of the AST it can
/// produce, which in turn bounds the recursion in evaluation. Without the
/// cap, a few hundred thousand `(` characters overflow the thread stack.
const MAX_NESTING_DEPTH: usize = 100;

/// Parse a sanitized expression string into an AST
///
/// The grammar follows conventional precedence: unary +/- bind tighter than
/// multiplication, `**` binds tighter than unary on its left operand and is
/// right-associative, so `-2 ** 2` is `-(2 ** 2)` and `2 ** -3` parses.
///
/// # Errors
///
/// This function will return an error if:
/// * The input is empty or contains no tokens
/// * The token stream is not a single well-formed expression (dangling
///   operators, unbalanced parentheses, trailing tokens)
/// * Nesting exceeds the recursion depth cap
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    debug!("Parsing expression: '{}'", input);

    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expression()?;
    match parser.peek() {
        Some(tok) => Err(ParseError::UnexpectedToken(tok)),
        None => Ok(expr),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// expression := term (("+" | "-") term)*
    fn expression(&mut self) -> Result<Expression, ParseError> {
        let mut node = self.term()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Plus => {
                    self.advance();
                    let rhs = self.term()?;
                    node = Expression::Add(Box::new(node), Box::new(rhs));
                }
                Token::Minus => {
                    self.advance();
                    let rhs = self.term()?;
                    node = Expression::Sub(Box::new(node), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(node)
    }

    /// term := factor (("*" | "/" | "%") factor)*
    fn term(&mut self) -> Result<Expression, ParseError> {
        let mut node = self.factor()?;
        while let Some(tok) = self.peek() {
            match tok {
                Token::Star => {
                    self.advance();
                    let rhs = self.factor()?;
                    node = Expression::Mul(Box::new(node), Box::new(rhs));
                }
                Token::Slash => {
                    self.advance();
                    let rhs = self.factor()?;
                    node = Expression::Div(Box::new(node), Box::new(rhs));
                }
                Token::Percent => {
                    self.advance();
                    let rhs = self.factor()?;
                    node = Expression::Mod(Box::new(node), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(node)
    }

    /// factor := ("+" | "-") factor | power
    ///
    /// Every recursion cycle in the grammar passes through here (unary
    /// chains directly, parentheses via atom -> expression, exponents via
    /// power), so this is the single place the depth cap is enforced.
    fn factor(&mut self) -> Result<Expression, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::TooDeeplyNested);
        }
        self.depth += 1;
        let result = match self.peek() {
            Some(Token::Minus) => {
                self.advance();
                self.factor()
                    .map(|operand| Expression::Neg(Box::new(operand)))
            }
            Some(Token::Plus) => {
                self.advance();
                self.factor()
                    .map(|operand| Expression::Pos(Box::new(operand)))
            }
            _ => self.power(),
        };
        self.depth -= 1;
        result
    }

    /// power := atom ("**" factor)?
    ///
    /// The exponent re-enters at factor level so it may carry its own sign,
    /// and recursing rather than looping makes `**` right-associative.
    fn power(&mut self) -> Result<Expression, ParseError> {
        let base = self.atom()?;
        if self.peek() == Some(Token::DoubleStar) {
            self.advance();
            let exponent = self.factor()?;
            Ok(Expression::Pow(Box::new(base), Box::new(exponent)))
        } else {
            Ok(base)
        }
    }

    /// atom := NUMBER | "(" expression ")"
    fn atom(&mut self) -> Result<Expression, ParseError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expression::Number(n)),
            Some(Token::LParen) => {
                let inner = self.expression()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(tok) => Err(ParseError::UnexpectedToken(tok)),
                    None => Err(ParseError::UnbalancedParens),
                }
            }
            Some(tok) => Err(ParseError::UnexpectedToken(tok)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
