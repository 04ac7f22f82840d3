//! Expansion errors

use thiserror::Error;

/// Errors reported while scanning or expanding a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The input ends with a lone `$`.
    #[error("expected character after '$'")]
    TrailingDollar,

    /// A `$` is followed by whitespace.
    #[error("unexpected character '{0}' after '$'")]
    UnexpectedCharacter(char),

    /// A `$` is followed by something other than `(` or `$`.
    #[error("expected '(' after '$', did you mean $({word})?")]
    ExpectedParen {
        /// The text following the `$`, up to the next whitespace.
        word: String,
    },

    /// A `$(` has no closing `)`.
    #[error("missing )")]
    MissingCloseParen,

    /// The name handler refused a placeholder.
    #[error("cannot expand $({name}): {message}")]
    Handler {
        /// The placeholder name passed to the handler.
        name: String,
        /// Why the handler failed.
        message: String,
    },
}

impl ExpandError {
    /// Creates a handler failure for `name`.
    pub fn handler(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Handler {
            name: name.into(),
            message: message.into(),
        }
    }
}
