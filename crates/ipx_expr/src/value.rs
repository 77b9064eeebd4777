//! Values produced by expression evaluation.

use std::fmt;

/// The result of evaluating a constant expression.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// An integer. 128 bits wide so both signed and unsigned 64-bit values fit.
    Int(i128),
    /// A finite floating-point number.
    Real(f64),
    /// A string literal's contents, without the quotes.
    Str(String),
    /// Elements of an array literal.
    Array(Vec<Value>),
    /// Anything that could not be evaluated; displays as `x`.
    Unknown,
}

impl Value {
    /// Builds a boolean result as `1` or `0`.
    pub fn from_bool(b: bool) -> Value {
        Value::Int(i128::from(b))
    }

    /// Returns the value as a float if it is numeric.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Real(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the truth of the value for `?:`, `&&`, `||` and `!`, or `None`
    /// when it has no truth value.
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Value::Int(n) => Some(*n != 0),
            Value::Real(f) => Some(*f != 0.0),
            _ => None,
        }
    }

    /// Returns `true` for [`Unknown`](Value::Unknown).
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Array(elements) => {
                f.write_str("{")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{element}")?;
                }
                f.write_str("}")
            }
            Value::Unknown => f.write_str("x"),
        }
    }
}
