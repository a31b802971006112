/// Arithmetic expressions the restricted parser can produce
///
/// The enum is closed: numeric literals, six binary operators and two unary
/// operators. Function calls, names, indexing and attribute access are not
/// representable, which is what makes evaluating untrusted input safe.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Pow(Box<Expression>, Box<Expression>),
    Mod(Box<Expression>, Box<Expression>),
    Neg(Box<Expression>),
    Pos(Box<Expression>),
}
