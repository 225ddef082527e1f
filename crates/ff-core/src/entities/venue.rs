use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{ImageRef, OwnerRef};
use crate::errors::VenueValidationError;
use crate::ids::deserialize_id;
use crate::nullable::null_as_default;

/// Cover shown when a venue has no uploaded image.
pub const VENUE_COVER_PLACEHOLDER: &str = "https://via.placeholder.com/400x250";

/// A listed restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<ImageRef>,
    /// Joined owner; `None` when the relation was not included or unresolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Venue {
    /// Thumbnail URL, or the placeholder cover.
    #[must_use]
    pub fn cover_url(&self) -> &str {
        self.cover_image
            .as_ref()
            .and_then(|image| image.size_url("thumbnail"))
            .unwrap_or(VENUE_COVER_PLACEHOLDER)
    }

    /// Owner display name, `"N/A"` when the owner is unknown.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|owner| owner.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
    }

    /// Whether the joined owner is the given identity.
    #[must_use]
    pub fn is_owned_by(&self, identity_id: &str) -> bool {
        self.owner
            .as_ref()
            .is_some_and(|owner| owner.id == identity_id)
    }
}

/// Payload for the create-venue operation.
///
/// ## Invariants
/// - `name` is trimmed and non-empty.
/// - `description` and `address` are optional and sent as empty strings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewVenue {
    name: String,
    description: String,
    address: String,
}

impl NewVenue {
    /// # Errors
    ///
    /// Returns [`VenueValidationError::EmptyName`] when the name is blank.
    pub fn try_new(
        name: &str,
        description: &str,
        address: &str,
    ) -> Result<Self, VenueValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VenueValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_owned(),
            description: description.trim().to_owned(),
            address: address.trim().to_owned(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn venue_json(owner: &str) -> String {
        format!(
            r#"{{"id":"r1","name":"Trattoria","description":"Pasta","address":"1 Main St",{owner}"createdAt":"2024-05-01T12:00:00Z"}}"#
        )
    }

    #[test]
    fn decodes_listing_with_joined_owner() {
        let venue: Venue =
            serde_json::from_str(&venue_json(r#""owner":{"id":"u2","name":"Olivia"},"#)).unwrap();
        assert_eq!(venue.owner_name(), "Olivia");
        assert!(venue.is_owned_by("u2"));
        assert!(!venue.is_owned_by("u3"));
        assert_eq!(venue.cover_url(), VENUE_COVER_PLACEHOLDER);
    }

    #[test]
    fn missing_owner_is_never_owned() {
        let venue: Venue = serde_json::from_str(&venue_json(r#""owner":null,"#)).unwrap();
        assert_eq!(venue.owner_name(), "N/A");
        assert!(!venue.is_owned_by(""));
    }

    #[test]
    fn cover_url_prefers_thumbnail() {
        let venue: Venue = serde_json::from_str(
            r#"{"id":"r2","name":"Noodle Bar","coverImage":{"thumbnail":{"url":"https://cdn/r2.jpg"}}}"#,
        )
        .unwrap();
        assert_eq!(venue.cover_url(), "https://cdn/r2.jpg");
        assert!(venue.description.is_empty());
    }

    #[test]
    fn new_venue_requires_name_only() {
        let payload = NewVenue::try_new(" Bistro ", "", "  ").unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"name": "Bistro", "description": "", "address": ""})
        );
        assert_eq!(
            NewVenue::try_new("   ", "desc", "addr").unwrap_err(),
            VenueValidationError::EmptyName
        );
    }
}
