use serde::{Deserialize, Serialize};

use crate::entities::ImageRef;
use crate::ids::{deserialize_id, deserialize_opt_id};
use crate::nullable::null_as_default;

/// Photo shown when a menu entry has no uploaded image.
pub const MENU_PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/100";

/// A purchasable item on a venue's menu. Read-only from the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<ImageRef>,
    #[serde(
        default,
        deserialize_with = "deserialize_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub restaurant_id: Option<String>,
}

impl MenuEntry {
    /// Small photo URL, or the placeholder.
    #[must_use]
    pub fn photo_url(&self) -> &str {
        self.photo
            .as_ref()
            .and_then(|image| image.size_url("small"))
            .unwrap_or(MENU_PHOTO_PLACEHOLDER)
    }

    /// Price formatted for display, e.g. `$12.50`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_entry_with_foreign_key() {
        let entry: MenuEntry = serde_json::from_str(
            r#"{"id":"m1","name":"Margherita","description":"Tomato, basil","price":12.5,"restaurantId":"r1","photo":{"small":{"url":"https://cdn/m1.jpg"}}}"#,
        )
        .unwrap();
        assert_eq!(entry.restaurant_id.as_deref(), Some("r1"));
        assert_eq!(entry.display_price(), "$12.50");
        assert_eq!(entry.photo_url(), "https://cdn/m1.jpg");
    }

    #[test]
    fn photo_falls_back_to_placeholder() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"id":9,"name":"Water","price":0}"#).unwrap();
        assert_eq!(entry.id, "9");
        assert_eq!(entry.photo_url(), MENU_PHOTO_PLACEHOLDER);
        assert_eq!(entry.display_price(), "$0.00");
    }
}
