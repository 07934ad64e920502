//! Error types for the Flick server client.

use thiserror::Error;

/// Errors that can occur when talking to the Flick backend.
///
/// Business rejections (bad credentials, duplicate username, profile
/// validation) are NOT errors: the backend reports them with an in-band
/// `success: false` flag and the affected accessors surface them as
/// [`crate::AuthOutcome::Rejected`]. Everything here is the transport /
/// unexpected-failure channel.
#[derive(Error, Debug)]
pub enum ServerClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Session cookie missing or expired
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ServerClientError>;
