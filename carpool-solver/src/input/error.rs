//! Instance file error types.

use std::path::PathBuf;

use crate::domain::DomainError;

/// Errors that can occur while reading an instance file.
///
/// Line numbers are 1-based and refer to the raw file, blank lines included.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File ended before a required line
    #[error("unexpected end of input: expected {expected}")]
    MissingLine { expected: &'static str },

    /// Line has fewer fields than required
    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    /// Field is not a valid number
    #[error("line {line}: field `{field}` is not a valid number: {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Flag field is neither 0 nor 1
    #[error("line {line}: field `{field}` must be 0 or 1, got {value:?}")]
    InvalidFlag {
        line: usize,
        field: &'static str,
        value: String,
    },

    /// Trip id token is not a valid id
    #[error("line {line}: invalid trip id {value:?}")]
    InvalidId { line: usize, value: String },

    /// Edge refers to a trip that was never declared
    #[error("line {line}: unknown trip {id}")]
    UnknownTrip { line: usize, id: String },

    /// Trip record violates a domain rule
    #[error("line {line}: {source}")]
    InvalidTrip {
        line: usize,
        #[source]
        source: DomainError,
    },
}
