//! CLI error types.

use thiserror::Error;

use holidays_api::ApiError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Request to the holidays API failed.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// Could not render the result.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Logging could not be initialised.
    #[error("tracing error: {0}")]
    Tracing(#[from] holidays_core::TracingError),
}
