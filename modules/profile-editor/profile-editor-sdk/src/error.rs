//! Error types for the profile backend API.

use thiserror::Error;

/// Errors returned by a [`crate::ProfileApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileApiError {
    /// The backend answered with a non-success status and a message.
    #[error("request rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, intended for display.
        message: String,
    },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ProfileApiError {
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
