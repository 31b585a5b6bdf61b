//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the type set is fixed (number, text), so
//! pattern matching on the operand pair is preferred over anything
//! dynamic — the compiler checks exhaustiveness for us.

use tally_diagnostic::RuntimeError;
use tally_ir::{BinaryOp, UnaryOp, Value};

/// Evaluate a binary operation.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, RuntimeError> {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Text(a), Value::Text(b)) => eval_text_binary(a, b, op),
        (Value::Number(_), Value::Text(_)) => Err(mixed_operands(op, "number and text")),
        (Value::Text(_), Value::Number(_)) => Err(mixed_operands(op, "text and number")),
    }
}

/// Evaluate a unary operation.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> Result<Value, RuntimeError> {
    match op {
        UnaryOp::Neg => match operand {
            Value::Number(n) => Ok(Value::Number(-n)),
            Value::Text(_) => Err(RuntimeError::TypeMismatch {
                operation: "unary `-`",
                expected: "number",
                found: "text",
            }),
        },
    }
}

/// Binary operations on two numbers; IEEE-754 semantics throughout, with
/// zero divisors surfaced as errors instead of infinities.
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> Result<Value, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(Value::Number(a + b)),
        BinaryOp::Sub => Ok(Value::Number(a - b)),
        BinaryOp::Mul => Ok(Value::Number(a * b)),
        BinaryOp::Div => {
            if b == 0.0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Number(a / b))
            }
        }
        BinaryOp::Mod => {
            if b == 0.0 {
                Err(RuntimeError::ModuloByZero)
            } else {
                Ok(Value::Number(a % b))
            }
        }
        BinaryOp::Pow => Ok(Value::Number(a.powf(b))),
    }
}

/// Binary operations on two texts: `+` concatenates, nothing else applies.
fn eval_text_binary(a: &str, b: &str, op: BinaryOp) -> Result<Value, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(Value::text(format!("{a}{b}"))),
        _ => Err(RuntimeError::TypeMismatch {
            operation: operation_name(op),
            expected: "number",
            found: "text",
        }),
    }
}

fn mixed_operands(op: BinaryOp, found: &'static str) -> RuntimeError {
    RuntimeError::TypeMismatch {
        operation: operation_name(op),
        expected: "matching operand types",
        found,
    }
}

fn operation_name(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "`+`",
        BinaryOp::Sub => "`-`",
        BinaryOp::Mul => "`*`",
        BinaryOp::Div => "`/`",
        BinaryOp::Mod => "`%`",
        BinaryOp::Pow => "`^`",
    }
}
