//! Client error types

use thiserror::Error;

use crate::validate::FieldErrors;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: the request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status. `message` comes from the structured
    /// error body when one is present, otherwise a generic
    /// status-coded fallback.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Client-side form validation failed; nothing was sent.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Durable storage error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// True when the backend rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401, .. })
    }

    /// Field-level validation messages, when this is a validation
    /// failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
