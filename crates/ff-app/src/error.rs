//! Application error types.

use ff_backend::BackendError;
use ff_core::{CoreError, CredentialsError, Role, VenueValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error(transparent)]
    VenueValidation(#[from] VenueValidationError),

    /// The active role may not perform the action.
    #[error("{role} accounts cannot create restaurants")]
    NotPermitted { role: Role },

    /// The action needs an authenticated identity.
    #[error("not logged in")]
    NotLoggedIn,

    /// The id does not match any venue in the current listing.
    #[error("unknown restaurant '{0}'")]
    UnknownVenue(String),
}
