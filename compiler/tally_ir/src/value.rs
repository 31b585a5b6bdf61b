//! Runtime values.

use std::fmt;

/// The only runtime data type: a number or a piece of text.
///
/// Arithmetic operators require [`Value::Number`]; string functions require
/// [`Value::Text`]. There is no implicit coercion between the two — mixing
/// them is a runtime error raised by the evaluator.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Double-precision float.
    Number(f64),
    /// Owned text.
    Text(String),
}

impl Value {
    /// Convenience constructor for text values.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Human-readable type name for error messages.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }

    /// The numeric payload, if this is a number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// The text payload, if this is text.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `{}` on f64 is the shortest round-tripping form: integral
            // values print without a fraction ("5", not "5.0").
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

#[cfg(test)]
mod tests;
