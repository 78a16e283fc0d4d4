//! Error types for rendering messages.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// Broad class of a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed directive or tag syntax.
    Parse,
    /// A directive names a formatter that is not registered.
    Dispatch,
    /// A required argument is missing or has the wrong type, or a style is invalid.
    Argument,
    /// No selector matches and there is no `other` fallback.
    Selection,
}

/// An error that occurred while parsing or rendering a message.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The pattern could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The directive's kind has no registered formatter.
    #[error("unknown formatter '{kind}' for argument '{arg}'")]
    UnknownFormatter { kind: String, arg: String },

    /// A required keyword argument was not supplied.
    #[error("missing argument '{name}'")]
    MissingArgument { name: String },

    /// A keyword argument has the wrong type.
    #[error("argument '{name}' must be {expected}, got {found}")]
    InvalidArgument {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The directive's style is not understood by its formatter.
    #[error("invalid style '{style}' for '{kind}' formatter")]
    InvalidStyle { kind: String, style: String },

    /// No selector matched and no `other` branch exists.
    #[error(
        "no selector '{key}' or 'other' for argument '{arg}', available: {}{}",
        available.join(", "),
        format_suggestions(suggestions)
    )]
    MissingSelector {
        arg: String,
        key: String,
        available: Vec<String>,
        suggestions: Vec<String>,
    },
}

impl FormatError {
    /// The broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::Parse(_) => ErrorKind::Parse,
            FormatError::UnknownFormatter { .. } => ErrorKind::Dispatch,
            FormatError::MissingArgument { .. }
            | FormatError::InvalidArgument { .. }
            | FormatError::InvalidStyle { .. } => ErrorKind::Argument,
            FormatError::MissingSelector { .. } => ErrorKind::Selection,
        }
    }

    /// True if the pattern itself was malformed.
    pub fn is_parse(&self) -> bool {
        matches!(self, FormatError::Parse(_))
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for a missing selector key.
///
/// Returns up to three keys within edit distance 1 (short keys) or 2 (keys
/// longer than three characters), closest first.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() > 3 { 2 } else { 1 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
