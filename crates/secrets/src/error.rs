//! Error types for the secrets-manager client.

use thiserror::Error;

/// Result type alias for secrets client operations.
pub type Result<T> = std::result::Result<T, SecretsError>;

/// Errors that can occur while fetching a secret.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error response from the secrets-manager API.
    #[error("Secrets API error ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body did not carry a parsable credential record.
    #[error("Invalid secret payload: {0}")]
    InvalidPayload(String),

    /// The client was built without a required parameter.
    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),
}
