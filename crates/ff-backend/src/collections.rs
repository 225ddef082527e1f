//! Typed collection calls used by the dashboard.

use ff_core::{MenuEntry, NewVenue, Venue};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Backend, BackendError, Entity, FindQuery, Page, SortOrder};

/// Relation joined onto venue listings.
pub const OWNER_RELATION: &str = "owner";
/// Foreign key on menu items.
pub const VENUE_FOREIGN_KEY: &str = "restaurantId";

/// Query used for the venue grid: owners joined, newest first.
#[must_use]
pub fn venue_listing_query() -> FindQuery {
    FindQuery::new()
        .include(OWNER_RELATION)
        .sort("createdAt", SortOrder::Desc)
}

/// Query used for a venue's menu.
#[must_use]
pub fn menu_query(venue_id: &str) -> FindQuery {
    FindQuery::new().filter_eq(VENUE_FOREIGN_KEY, venue_id)
}

/// Fetch every venue, newest first, with its owner.
///
/// # Errors
///
/// Returns [`BackendError`] when the request fails or a row does not decode.
pub async fn list_venues(backend: &dyn Backend) -> Result<Vec<Venue>, BackendError> {
    let page = backend
        .find(Entity::Restaurant, &venue_listing_query())
        .await?;
    decode_rows(Entity::Restaurant, page)
}

/// Fetch the menu entries belonging to one venue.
///
/// # Errors
///
/// Returns [`BackendError`] when the request fails or a row does not decode.
pub async fn list_menu_entries(
    backend: &dyn Backend,
    venue_id: &str,
) -> Result<Vec<MenuEntry>, BackendError> {
    let page = backend
        .find(Entity::MenuItem, &menu_query(venue_id))
        .await?;
    decode_rows(Entity::MenuItem, page)
}

/// Create a venue and return it as stored.
///
/// # Errors
///
/// Returns [`BackendError`] when the request fails or the stored row does
/// not decode.
pub async fn create_venue(backend: &dyn Backend, venue: &NewVenue) -> Result<Venue, BackendError> {
    let data = serde_json::to_value(venue)
        .map_err(|e| BackendError::Decode(format!("encode new venue: {e}")))?;
    let stored = backend.create(Entity::Restaurant, data).await?;
    serde_json::from_value(stored)
        .map_err(|e| BackendError::Decode(format!("created {}: {e}", Entity::Restaurant)))
}

fn decode_rows<T: DeserializeOwned>(entity: Entity, page: Page<Value>) -> Result<Vec<T>, BackendError> {
    if page.is_truncated() {
        tracing::warn!(
            %entity,
            total = ?page.total,
            "listing was truncated by the backend page size"
        );
    }
    page.data
        .into_iter()
        .map(|row| {
            serde_json::from_value(row)
                .map_err(|e| BackendError::Decode(format!("{entity} row: {e}")))
        })
        .collect()
}
