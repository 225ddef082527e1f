//! # ff-backend
//!
//! Client side of the hosted backend-as-a-service FlavorFind runs on.
//!
//! The [`Backend`] trait is the whole contract the application consumes:
//! object-store `find`/`create`, `login`/`logout`, the `me` session lookup,
//! and a reachability `ping`. [`ManifestClient`] implements it over the
//! backend's REST API; tests substitute `MockBackend` (feature `mock`).

pub mod collections;
pub mod manifest;
pub mod page;
pub mod query;
pub mod token_store;

mod error;
mod http;

pub use error::BackendError;
pub use manifest::ManifestClient;
pub use page::Page;
pub use query::{FindQuery, SortOrder};
pub use token_store::{TokenSource, TokenStore};

use std::fmt;

use async_trait::async_trait;
use ff_core::{Credentials, Identity};
use serde_json::Value;

/// Backend collections the client reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    User,
    Restaurant,
    MenuItem,
}

impl Entity {
    /// Entity name as declared in the backend schema.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Restaurant => "Restaurant",
            Self::MenuItem => "MenuItem",
        }
    }

    /// URL slug of the collection.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Restaurant => "restaurants",
            Self::MenuItem => "menu-items",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operations exposed by the hosted backend.
///
/// All calls are independent requests: no retries, no refresh, no
/// de-duplication. One instance is shared read-only for the whole session.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    /// Lightweight reachability check.
    async fn ping(&self) -> Result<(), BackendError>;

    /// List rows of `entity` matching `query`.
    async fn find(&self, entity: Entity, query: &FindQuery) -> Result<Page<Value>, BackendError>;

    /// Create a row of `entity` and return it as stored.
    async fn create(&self, entity: Entity, data: Value) -> Result<Value, BackendError>;

    /// Authenticate and keep the resulting session.
    async fn login(&self, credentials: &Credentials) -> Result<(), BackendError>;

    /// Drop the current session.
    async fn logout(&self) -> Result<(), BackendError>;

    /// Resolve the identity behind the current session.
    async fn me(&self) -> Result<Identity, BackendError>;
}
