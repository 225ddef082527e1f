//! Backend error types.

use thiserror::Error;

/// Errors that can occur when talking to the hosted backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// Credentials were rejected or the session token is no longer valid.
    #[error("unauthorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    /// A session lookup was attempted without a session token.
    #[error("not authenticated; log in first")]
    NotAuthenticated,

    /// The response body did not have the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The session token could not be persisted or removed.
    #[error("token store error: {0}")]
    TokenStore(String),
}

impl BackendError {
    /// Whether the error means "no usable session" rather than a fault.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized { .. } | Self::NotAuthenticated)
    }
}
