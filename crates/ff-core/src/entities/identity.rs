use serde::{Deserialize, Serialize};

use crate::enums::Role;
use crate::ids::deserialize_id;
use crate::nullable::null_as_default;

/// The authenticated principal returned by the session lookup.
///
/// Created by the backend on signup. The client only ever holds a copy for
/// the lifetime of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub role: Role,
}

impl Identity {
    /// Name shown in the dashboard header, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Owner relation joined onto a venue listing.
///
/// The relation payload is the owning `User`, but only the fields the
/// dashboard needs are kept, and all of them except `id` are optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnerRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email() {
        let identity = Identity {
            id: "u1".into(),
            email: "owner@example.com".into(),
            name: "  ".into(),
            role: Role::Owner,
        };
        assert_eq!(identity.display_name(), "owner@example.com");
    }

    #[test]
    fn decodes_backend_user_payload() {
        let identity: Identity = serde_json::from_str(
            r#"{"id":3,"email":"diner@example.com","name":"Dana","role":"diner","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(identity.id, "3");
        assert_eq!(identity.role, Role::Diner);
        assert_eq!(identity.display_name(), "Dana");
    }
}
