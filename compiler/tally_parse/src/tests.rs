use super::*;
use pretty_assertions::assert_eq;

fn parsed(source: &str) -> Expr {
    match parse_source(source) {
        Ok(expr) => expr,
        Err(err) => panic!("parse failed on {source:?}: {err}"),
    }
}

fn num(n: f64) -> Expr {
    Expr::Number(n)
}

#[test]
fn test_precedence_mul_over_add() {
    assert_eq!(
        parsed("1+2*3"),
        Expr::binary(BinaryOp::Add, num(1.0), Expr::binary(BinaryOp::Mul, num(2.0), num(3.0)))
    );
}

#[test]
fn test_precedence_pow_over_mul() {
    assert_eq!(
        parsed("2*3^2"),
        Expr::binary(BinaryOp::Mul, num(2.0), Expr::binary(BinaryOp::Pow, num(3.0), num(2.0)))
    );
}

#[test]
fn test_pow_is_right_associative() {
    assert_eq!(
        parsed("2^3^2"),
        Expr::binary(BinaryOp::Pow, num(2.0), Expr::binary(BinaryOp::Pow, num(3.0), num(2.0)))
    );
}

#[test]
fn test_add_is_left_associative() {
    assert_eq!(
        parsed("1-2-3"),
        Expr::binary(BinaryOp::Sub, Expr::binary(BinaryOp::Sub, num(1.0), num(2.0)), num(3.0))
    );
}

#[test]
fn test_unary_minus_binds_tighter_than_pow() {
    assert_eq!(
        parsed("-5^2"),
        Expr::binary(BinaryOp::Pow, Expr::unary(UnaryOp::Neg, num(5.0)), num(2.0))
    );
}

#[test]
fn test_unary_minus_in_exponent() {
    assert_eq!(
        parsed("2^-3"),
        Expr::binary(BinaryOp::Pow, num(2.0), Expr::unary(UnaryOp::Neg, num(3.0)))
    );
}

#[test]
fn test_double_minus_from_substitution() {
    // Substituting x = -5 into `3-x` yields `3--5`.
    assert_eq!(
        parsed("3--5"),
        Expr::binary(BinaryOp::Sub, num(3.0), Expr::unary(UnaryOp::Neg, num(5.0)))
    );
}

#[test]
fn test_parens_override_precedence() {
    assert_eq!(
        parsed("(1+2)*3"),
        Expr::binary(BinaryOp::Mul, Expr::binary(BinaryOp::Add, num(1.0), num(2.0)), num(3.0))
    );
}

#[test]
fn test_call_with_expression_arguments() {
    assert_eq!(
        parsed("max(1+2,4)"),
        Expr::Call {
            name: "max".to_string(),
            args: vec![Expr::binary(BinaryOp::Add, num(1.0), num(2.0)), num(4.0)],
        }
    );
}

#[test]
fn test_nested_calls() {
    assert_eq!(
        parsed("len(upper(\"abc\"))"),
        Expr::Call {
            name: "len".to_string(),
            args: vec![Expr::Call {
                name: "upper".to_string(),
                args: vec![Expr::Text("abc".to_string())],
            }],
        }
    );
}

#[test]
fn test_bare_identifier_is_a_var() {
    assert_eq!(parsed("max"), Expr::Var("max".to_string()));
}

#[test]
fn test_string_literal() {
    assert_eq!(parsed("\"hi\""), Expr::Text("hi".to_string()));
}

#[test]
fn test_empty_input_is_an_error() {
    assert_eq!(parse(Vec::new()), Err(ParseError::EmptyExpression));
}

#[test]
fn test_unmatched_paren_is_an_error() {
    assert!(matches!(
        parse_source("(1+2"),
        Err(ParseError::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_trailing_tokens_are_an_error() {
    assert!(matches!(
        parse_source("(1)(2)"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_dangling_operator_is_an_error() {
    assert!(matches!(
        parse_source("1+"),
        Err(ParseError::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_missing_argument_is_an_error() {
    assert!(parse_source("max(1,)").is_err());
}
