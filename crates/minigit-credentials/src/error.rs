//! Error types for credential operations.

use thiserror::Error;

/// Errors that can occur during credential operations.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A new credential was added without an id.
    #[error("the credential id must not be empty")]
    EmptyId,

    /// A credential with this id is already stored.
    #[error("credential already exists: {id}")]
    AlreadyExists { id: String },

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error on the credentials file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;
