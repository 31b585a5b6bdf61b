//! The unified diagnostic folded at the containment boundary.

use std::fmt;

use crate::{ParseError, PreprocessError, RuntimeError};

/// Any failure an invocation can contain, tagged by phase.
///
/// The script runner logs the code and detail of a `Diagnostic` and then
/// replaces it with the sentinel error value; kind-specific detail never
/// reaches the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    Preprocess(PreprocessError),
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Stable machine-readable code of the underlying error.
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::Preprocess(e) => e.code(),
            Diagnostic::Parse(e) => e.code(),
            Diagnostic::Runtime(e) => e.code(),
        }
    }

    /// The phase that failed.
    pub fn phase(&self) -> &'static str {
        match self {
            Diagnostic::Preprocess(_) => "preprocess",
            Diagnostic::Parse(_) => "parse",
            Diagnostic::Runtime(_) => "runtime",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Preprocess(e) => write!(f, "{e}"),
            Diagnostic::Parse(e) => write!(f, "{e}"),
            Diagnostic::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Diagnostic {}

impl From<PreprocessError> for Diagnostic {
    fn from(e: PreprocessError) -> Self {
        Diagnostic::Preprocess(e)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(e: ParseError) -> Self {
        Diagnostic::Parse(e)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(e: RuntimeError) -> Self {
        Diagnostic::Runtime(e)
    }
}
