//! Role enum for authenticated identities.
//!
//! Serialized as `snake_case`, matching the values the backend stores on the
//! `User` entity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to an identity. Selects which dashboard variant is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Diner,
    Owner,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diner => "diner",
            Self::Owner => "owner",
        }
    }

    /// Owners may add venues; diners only browse.
    #[must_use]
    pub const fn can_create_venues(self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Diners get the "Add to Order" affordance on menu entries.
    #[must_use]
    pub const fn can_order(self) -> bool {
        matches!(self, Self::Diner)
    }

    /// Capitalized label used in the dashboard header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diner => "Diner",
            Self::Owner => "Owner",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Owner).unwrap(), "\"owner\"");
        let role: Role = serde_json::from_str("\"diner\"").unwrap();
        assert_eq!(role, Role::Diner);
    }

    #[test]
    fn unknown_role_fails_to_deserialize() {
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn permissions_follow_role() {
        assert!(Role::Owner.can_create_venues());
        assert!(!Role::Owner.can_order());
        assert!(Role::Diner.can_order());
        assert!(!Role::Diner.can_create_venues());
    }
}
