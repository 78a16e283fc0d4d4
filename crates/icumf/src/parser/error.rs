//! Parse error types for message patterns.

use thiserror::Error;

/// An error that occurred while parsing a pattern.
///
/// The parser never returns a partial node sequence: any grammar violation
/// aborts the whole parse with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}: {message}")]
    UnexpectedEof {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// 1-based line and column of the error.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column, .. } => (*line, *column),
        }
    }
}
