use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A malformed or incomplete term.
///
/// Parsing stops at the first violation, so there is exactly one error per
/// failed parse and no partial tree is returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message} at position {position}")]
pub struct ParseError {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// 0-based character index of the offending character, or the input
    /// length when the term ended early.
    pub position: usize,
}

impl ParseError {
    /// Create a new error.
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// A character that no grammar rule accepts at this point.
    pub fn unexpected_char(found: char, position: usize) -> Self {
        Self::new(format!("unexpected character '{found}'"), position)
    }

    /// Input ran out while a value was still required.
    pub fn unexpected_end(position: usize) -> Self {
        Self::new("unexpected end of term", position)
    }

    /// A specific character was required but something else (or nothing) was found.
    pub fn expected(expected: char, found: Option<char>, position: usize) -> Self {
        match found {
            Some(found) => Self::new(
                format!("expected '{expected}' but found '{found}'"),
                position,
            ),
            None => Self::new(
                format!("expected '{expected}' but reached end of term"),
                position,
            ),
        }
    }
}
