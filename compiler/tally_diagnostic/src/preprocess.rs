//! Errors raised by the preprocessor's text-rewriting passes.

use std::fmt;

/// A substitution pass could not produce well-formed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreprocessError {
    /// A string literal was opened but never closed.
    UnterminatedString,
    /// `time(<field>)` named a field the clock snapshot does not have.
    UnknownTimeField(String),
    /// `time(` without a closing `)`.
    UnterminatedTimeRef,
    /// A `!^` root operator whose operands are not bare numeric literals.
    RootOperand {
        /// Byte offset of the `!^` token in the statement.
        at: usize,
    },
    /// Parenthesis count left inconsistent after substitution.
    UnbalancedParens {
        /// Count of `(` outside string literals.
        open: usize,
        /// Count of `)` outside string literals.
        close: usize,
    },
    /// The text left of `=` in an assignment is not a valid identifier.
    InvalidAssignTarget(String),
}

impl PreprocessError {
    /// Stable machine-readable code, logged at the containment boundary.
    pub fn code(&self) -> &'static str {
        match self {
            PreprocessError::UnterminatedString => "E_PREPROCESS_UNTERMINATED_STRING",
            PreprocessError::UnknownTimeField(_) => "E_PREPROCESS_UNKNOWN_TIME_FIELD",
            PreprocessError::UnterminatedTimeRef => "E_PREPROCESS_UNTERMINATED_TIME_REF",
            PreprocessError::RootOperand { .. } => "E_PREPROCESS_ROOT_OPERAND",
            PreprocessError::UnbalancedParens { .. } => "E_PREPROCESS_UNBALANCED_PARENS",
            PreprocessError::InvalidAssignTarget(_) => "E_PREPROCESS_INVALID_ASSIGN_TARGET",
        }
    }
}

impl fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessError::UnterminatedString => write!(f, "unterminated string literal"),
            PreprocessError::UnknownTimeField(name) => {
                write!(f, "unknown time field `{name}`")
            }
            PreprocessError::UnterminatedTimeRef => write!(f, "`time(` without closing `)`"),
            PreprocessError::RootOperand { at } => write!(
                f,
                "`!^` at byte {at} is not between two numeric literals"
            ),
            PreprocessError::UnbalancedParens { open, close } => write!(
                f,
                "unbalanced parentheses: {open} `(` vs {close} `)`"
            ),
            PreprocessError::InvalidAssignTarget(name) => {
                write!(f, "`{name}` is not a valid variable name")
            }
        }
    }
}

impl std::error::Error for PreprocessError {}
