//! Error types for the session store.

use thiserror::Error;

/// Errors that can occur reading or writing the session file.
#[derive(Error, Debug)]
pub enum SessionStoreError {
    /// IO error touching the session file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session store operations.
pub type Result<T> = std::result::Result<T, SessionStoreError>;
