use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_integer(value: f64) -> bool {
    if value.abs() > 2_f64.powi(52) {
        true
    } else {
        (value - value.round()).abs() < f64::EPSILON
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns an error when attempting:
    /// - Division or modulo by zero
    /// - Raising a negative base to a fractional exponent (complex result)
    /// - A power whose result exceeds the finite f64 range
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Add(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left + right)
            }
            Expression::Sub(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left - right)
            }
            Expression::Mul(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                Ok(left * right)
            }
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                // Exact comparison on purpose: a tiny divisor is a valid
                // divisor, only 0.0 itself (and -0.0) is a fault.
                if right == 0.0 {
                    debug!("Division by zero attempted");
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Expression::Pow(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if left < 0.0 && !is_integer(right) {
                    debug!(
                        "Complex result from negative base with fractional exponent: {} ** {}",
                        left, right
                    );
                    Err(ExpressionError::ComplexResult)
                } else {
                    let value = left.powf(right);
                    if value.is_finite() {
                        Ok(value)
                    } else {
                        debug!("Power overflowed: {} ** {}", left, right);
                        Err(ExpressionError::Overflow)
                    }
                }
            }
            Expression::Mod(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right == 0.0 {
                    debug!("Modulo by zero attempted");
                    Err(ExpressionError::ModuloByZero)
                } else {
                    // Floored modulo: the result takes the sign of the divisor,
                    // so -7 % 3 is 2 rather than -1.
                    let rem = left % right;
                    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
                        Ok(rem + right)
                    } else {
                        Ok(rem)
                    }
                }
            }
            Expression::Neg(e) => {
                let val = e.evaluate()?;
                Ok(-val)
            }
            Expression::Pos(e) => e.evaluate(),
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}
