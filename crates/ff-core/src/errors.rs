//! Cross-cutting error types for FlavorFind.
//!
//! Transport errors live in `ff-backend`, configuration errors in
//! `ff-config`. Everything converges into `anyhow` at the binary edge.

use thiserror::Error;

/// Errors that can be raised by any FlavorFind crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A view transition was attempted that the current view does not allow.
    #[error("Invalid view transition: cannot {action} from {from}")]
    InvalidTransition { from: String, action: String },
}

/// Rejected create-venue form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VenueValidationError {
    #[error("restaurant name must not be empty")]
    EmptyName,
}

/// Rejected login form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("password must not be empty")]
    EmptyPassword,
}
