use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

fn number(n: f64) -> Box<Expression> {
    Box::new(Expression::Number(n))
}

#[test]
fn test_addition() {
    let expr = Expression::Add(number(2.0), number(2.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 4.0).abs() < 1e-9);
    }
}

#[test]
fn test_subtraction() {
    let expr = Expression::Sub(number(10.0), number(4.5));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 5.5).abs() < 1e-9);
    }
}

#[test]
fn test_multiplication() {
    let expr = Expression::Mul(number(3.0), number(7.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 21.0).abs() < 1e-9);
    }
}

#[test]
fn test_division() {
    let expr = Expression::Div(number(10.0), number(4.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 2.5).abs() < 1e-9);
    }
}

#[test]
fn test_division_by_zero() {
    let expr = Expression::Div(number(1.0), number(0.0));
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::DivisionByZero);
    }
}

#[test]
fn test_division_by_tiny_divisor_succeeds() {
    // A small but nonzero divisor is a valid divisor, not a zero fault
    let expr = Expression::Div(number(1.0), number(1e-16));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 1e16).abs() < 1.0, "Expected 1e16, got {}", value);
    }
}

#[test]
fn test_division_by_negative_zero() {
    let expr = Expression::Div(number(1.0), number(-0.0));
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::DivisionByZero);
    }
}

#[test]
fn test_power() {
    let expr = Expression::Pow(number(2.0), number(10.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 1024.0).abs() < 1e-9);
    }
}

#[test]
fn test_power_negative_exponent() {
    let expr = Expression::Pow(number(2.0), number(-3.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 0.125).abs() < 1e-9);
    }
}

#[test]
fn test_power_complex_result() {
    let expr = Expression::Pow(number(-2.0), number(0.5));
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::ComplexResult);
    }
}

#[test]
fn test_power_overflow() {
    let expr = Expression::Pow(number(10.0), number(400.0));
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::Overflow);
    }
}

#[test]
fn test_modulo() {
    let expr = Expression::Mod(number(7.0), number(3.0));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_modulo_negative_dividend_is_floored() {
    // -7 % 3 is 2 under floored semantics, not -1
    let expr = Expression::Mod(
        Box::new(Expression::Neg(number(7.0))),
        number(3.0),
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 2.0).abs() < 1e-9, "Expected 2.0, got {}", value);
    }
}

#[test]
fn test_modulo_by_zero() {
    let expr = Expression::Mod(number(7.0), number(0.0));
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::ModuloByZero);
    }
}

#[test]
fn test_negation() {
    let expr = Expression::Neg(number(3.5));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - (-3.5)).abs() < 1e-9);
    }
}

#[test]
fn test_unary_plus_is_identity() {
    let expr = Expression::Pos(number(3.5));
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 3.5).abs() < 1e-9);
    }
}

#[test]
fn test_nested_expression() {
    // (1 + 2) * 3
    let expr = Expression::Mul(
        Box::new(Expression::Add(number(1.0), number(2.0))),
        number(3.0),
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 9.0).abs() < 1e-9);
    }
}

#[test]
fn test_error_propagates_from_operand() {
    // 1 + 1/0 fails with the inner division error
    let expr = Expression::Add(
        number(1.0),
        Box::new(Expression::Div(number(1.0), number(0.0))),
    );
    let result = expr.evaluate();
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e, ExpressionError::DivisionByZero);
    }
}

#[test]
fn test_expression_display() {
    let expr = Expression::Mul(
        Box::new(Expression::Add(number(1.0), number(2.0))),
        number(3.0),
    );
    assert_eq!(format!("{}", expr), "((1 + 2) * 3)");

    let expr = Expression::Pow(number(2.0), Box::new(Expression::Neg(number(3.0))));
    assert_eq!(format!("{}", expr), "(2 ** (-3))");
}
