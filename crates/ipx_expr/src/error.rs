//! Errors produced while lexing or parsing an expression.

/// Why an expression string is not a valid constant expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// The input was empty or only whitespace.
    #[error("empty expression")]
    Empty,

    /// A character that cannot start any token.
    #[error("unexpected character '{ch}' at offset {pos}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset in the input.
        pos: usize,
    },

    /// A numeric literal with digits that do not fit its base.
    #[error("malformed literal '{text}' at offset {pos}")]
    InvalidLiteral {
        /// The literal text.
        text: String,
        /// Byte offset in the input.
        pos: usize,
    },

    /// A string literal without its closing quote.
    #[error("unterminated string literal starting at offset {pos}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        pos: usize,
    },

    /// The parser needed one thing and found another.
    #[error("expected {expected} at offset {pos}, found {found}")]
    Expected {
        /// Description of what was expected.
        expected: &'static str,
        /// Description of the token found instead.
        found: String,
        /// Byte offset of the token found.
        pos: usize,
    },

    /// A `$name(...)` call to a function that is not supported.
    #[error("unknown system function '{name}'")]
    UnknownFunction {
        /// The function name including `$`.
        name: String,
    },

    /// A system function called with the wrong number of arguments.
    #[error("'{name}' takes {expected} argument(s), got {found}")]
    Arity {
        /// The function name including `$`.
        name: String,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ExprError::UnexpectedChar { ch: '#', pos: 3 }.to_string(),
            "unexpected character '#' at offset 3"
        );
        assert_eq!(
            ExprError::Arity {
                name: "$clog2".to_string(),
                expected: 1,
                found: 2
            }
            .to_string(),
            "'$clog2' takes 1 argument(s), got 2"
        );
    }
}
