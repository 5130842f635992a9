//! Error types for hstore parsing and serde conversion.
//!
//! Parsing is all-or-nothing: a malformed document never yields a partial
//! value. Every syntax error carries the 0-based character offset into the
//! text the caller passed in.
//!
//! ## Error Categories
//!
//! - **Unexpected tokens**: a stray separator, a doubled `=>`, trailing text
//!   after the root container, or a container mixing keyed and bare elements
//! - **Bracket mismatches**: a container opened with `{` closed by `]` or
//!   the other way round
//! - **Unexpected end of input**: an unterminated container or quote
//! - **Depth limit**: more containers open at once than the parser allows
//! - **Unsupported types**: serde values with no hstore shape
//!
//! ## Examples
//!
//! ```rust
//! use serde_hstore::{parse, Error};
//!
//! let err = parse(r#""a"=>1]"#).unwrap_err();
//! assert!(matches!(err, Error::BracketMismatch { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A character that cannot appear at this point of the document.
    #[error("Unexpected token '{found}' at position {position}: expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: char,
        expected: String,
    },

    /// A closing bracket that does not match the bracket that opened the container.
    #[error("Bracket mismatch at position {position}: expected '{expected}', found '{found}'")]
    BracketMismatch {
        position: usize,
        expected: char,
        found: char,
    },

    /// Input ended before the document was complete.
    #[error("Unexpected end of input at position {position}: expected {expected}")]
    UnexpectedEof { position: usize, expected: String },

    /// A container opened while `limit` containers were already open.
    #[error("Nesting depth limit ({limit}) exceeded at position {position}")]
    DepthLimitExceeded { position: usize, limit: usize },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected-token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Error;
    ///
    /// let err = Error::unexpected_token(3, ',', "a key or value");
    /// assert!(err.to_string().contains("position 3"));
    /// ```
    pub fn unexpected_token(position: usize, found: char, expected: &str) -> Self {
        Error::UnexpectedToken {
            position,
            found,
            expected: expected.to_string(),
        }
    }

    /// Creates a bracket-mismatch error.
    pub fn bracket_mismatch(position: usize, expected: char, found: char) -> Self {
        Error::BracketMismatch {
            position,
            expected,
            found,
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(position: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            position,
            expected: expected.to_string(),
        }
    }

    /// Creates a depth-limit error for the bracket at `position`.
    pub fn depth_limit_exceeded(position: usize, limit: usize) -> Self {
        Error::DepthLimitExceeded { position, limit }
    }

    /// Creates an unsupported type error for values that have no hstore representation.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_hstore::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the character offset of a syntax error, if this is one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::UnexpectedToken { position, .. }
            | Error::BracketMismatch { position, .. }
            | Error::UnexpectedEof { position, .. }
            | Error::DepthLimitExceeded { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Returns `true` for errors raised while reading hstore text.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        self.position().is_some()
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_accessor() {
        assert_eq!(Error::unexpected_eof(7, "'}'").position(), Some(7));
        assert_eq!(Error::bracket_mismatch(2, '}', ']').position(), Some(2));
        assert_eq!(Error::custom("x").position(), None);
        assert!(!Error::unsupported_type("bytes").is_syntax());
        assert_eq!(Error::depth_limit_exceeded(512, 512).position(), Some(512));
    }

    #[test]
    fn test_display() {
        let err = Error::bracket_mismatch(6, '}', ']');
        assert_eq!(
            err.to_string(),
            "Bracket mismatch at position 6: expected '}', found ']'"
        );
        assert_eq!(
            Error::depth_limit_exceeded(3, 2).to_string(),
            "Nesting depth limit (2) exceeded at position 3"
        );
    }
}
