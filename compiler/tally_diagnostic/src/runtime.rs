//! Errors raised while evaluating an expression tree.

use std::fmt;

/// Evaluation failed on a well-formed tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuntimeError {
    /// Division by zero.
    DivisionByZero,
    /// Modulo by zero.
    ModuloByZero,
    /// An operator or function received the wrong operand type.
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    /// A residual variable reference with no environment entry.
    UnknownVariable(String),
    /// A call to a name outside the fixed function library.
    UnknownFunction(String),
    /// A library function called with the wrong argument count.
    WrongArity {
        name: String,
        expected: usize,
        found: usize,
    },
    /// `rand(a, b)` with `a > b` after truncation.
    InvalidRandRange { lo: i64, hi: i64 },
}

impl RuntimeError {
    /// Stable machine-readable code, logged at the containment boundary.
    pub fn code(&self) -> &'static str {
        match self {
            RuntimeError::DivisionByZero => "E_RUNTIME_DIV_ZERO",
            RuntimeError::ModuloByZero => "E_RUNTIME_MOD_ZERO",
            RuntimeError::TypeMismatch { .. } => "E_RUNTIME_TYPE_MISMATCH",
            RuntimeError::UnknownVariable(_) => "E_RUNTIME_UNKNOWN_VARIABLE",
            RuntimeError::UnknownFunction(_) => "E_RUNTIME_UNKNOWN_FUNCTION",
            RuntimeError::WrongArity { .. } => "E_RUNTIME_WRONG_ARITY",
            RuntimeError::InvalidRandRange { .. } => "E_RUNTIME_INVALID_RAND_RANGE",
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::ModuloByZero => write!(f, "modulo by zero"),
            RuntimeError::TypeMismatch {
                operation,
                expected,
                found,
            } => write!(f, "{operation} expects {expected}, got {found}"),
            RuntimeError::UnknownVariable(name) => write!(f, "unknown variable `{name}`"),
            RuntimeError::UnknownFunction(name) => write!(f, "unknown function `{name}`"),
            RuntimeError::WrongArity {
                name,
                expected,
                found,
            } => write!(f, "`{name}` takes {expected} argument(s), got {found}"),
            RuntimeError::InvalidRandRange { lo, hi } => {
                write!(f, "rand range is inverted: {lo} > {hi}")
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
