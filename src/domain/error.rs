//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to the API model.
/// They are raised before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0:?} is not a correctly formatted option")]
    MalformedArgument(String),

    #[error("unknown API command: {0}")]
    UnknownCommand(String),

    #[error("{command}: missing required parameter '{parameter}'")]
    MissingParameter { command: String, parameter: String },

    #[error("payload has no '{0}' field")]
    MissingField(String),

    #[error("field '{field}' has unexpected value: {value}")]
    InvalidField { field: String, value: String },

    #[error("malformed XML: {0}")]
    InvalidXml(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
