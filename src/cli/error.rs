//! CLI-level errors (wraps infrastructure errors)

use std::error::Error as _;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        ApplicationError::Domain(e).into()
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::FAILURE,
            CliError::Infra(e) => match e {
                InfraError::Application(ApplicationError::Transport { .. }) => {
                    crate::exitcode::UNAVAILABLE
                }
                InfraError::Application(ApplicationError::Signing(_)) => crate::exitcode::SOFTWARE,
                InfraError::Application(_) | InfraError::Io { .. } | InfraError::Http { .. } => {
                    crate::exitcode::FAILURE
                }
            },
        }
    }

    /// Message including the chain of underlying causes.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let text = cause.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = cause.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_exit_with_failure() {
        let err: CliError = ApplicationError::ProfileNotFound("lab".into()).into();

        assert_eq!(err.exit_code(), crate::exitcode::FAILURE);
        assert_eq!(err.to_string(), "region 'lab' not in config");
    }

    #[test]
    fn test_transport_error_reports_cause() {
        let err: CliError = ApplicationError::Transport {
            endpoint: "https://api.example.com".into(),
            source: std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ),
        }
        .into();

        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
        assert_eq!(
            err.report(),
            "request to https://api.example.com failed: connection refused"
        );
    }
}
