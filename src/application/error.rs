//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Non-success answer from the API endpoint.
///
/// Carries the raw HTTP status and body; the body may itself be a JSON
/// encoded error description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status} response from CloudStack")]
pub struct ApiError {
    pub status: u16,
    pub body: String,
    /// Extra diagnostic when the body could not be decoded at all.
    pub hint: Option<String>,
}

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: std::io::Error,
    },

    #[error("region '{0}' not in config")]
    ProfileNotFound(String),

    #[error("config file not found, tried: {}", format_paths(.tried))]
    ConfigFileNotFound { tried: Vec<PathBuf> },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("cannot sign request: {0}")]
    Signing(String),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
