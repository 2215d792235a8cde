//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading uploaded rows into records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing field '{field}' at row {line}")]
    MissingField { line: usize, field: &'static str },

    #[error("invalid question_id at row {line}: {value}")]
    InvalidQuestionId { line: usize, value: String },
}

/// A string that is not one of the option labels A to D.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid option label: {0}")]
pub struct InvalidOptionLabel(pub String);
