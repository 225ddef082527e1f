//! # ff-core
//!
//! Core types shared across all FlavorFind crates:
//! - Entity structs mirroring the backend collections (users, restaurants, menu items)
//! - The `Role` enum that drives dashboard branching
//! - Validated inputs (login credentials, new venue payloads)
//! - Cross-cutting error types

pub mod credentials;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod nullable;

pub use credentials::Credentials;
pub use entities::{Identity, ImageRef, MenuEntry, NewVenue, OwnerRef, Venue};
pub use enums::Role;
pub use errors::{CoreError, CredentialsError, VenueValidationError};
