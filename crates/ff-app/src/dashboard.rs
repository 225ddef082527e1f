//! Venue and menu loading for the dashboard.
//!
//! Load failures are logged; a failed listing keeps the previous venues and
//! a failed menu fetch leaves the menu empty. Only a failed create
//! reaches the user as an alert.
//!
//! Menu fetches carry a generation number. Selecting another venue or going
//! back bumps the generation, so a response for an earlier selection is
//! dropped instead of overwriting the visible menu.

use ff_backend::collections::{create_venue, list_menu_entries, list_venues};
use ff_backend::{Backend, BackendError};
use ff_core::{Identity, MenuEntry, Venue};

use crate::error::AppError;
use crate::form::VenueForm;
use crate::notifier::{Alert, Notifier};

/// An in-flight menu fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRequest {
    generation: u64,
    venue_id: String,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    venues: Vec<Venue>,
    my_venues: Vec<Venue>,
    entries: Vec<MenuEntry>,
    form: VenueForm,
    generation: u64,
}

impl Dashboard {
    #[must_use]
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    /// Venues owned by the current owner; empty for diners.
    #[must_use]
    pub fn my_venues(&self) -> &[Venue] {
        &self.my_venues
    }

    /// Menu of the selected venue.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn form(&self) -> &VenueForm {
        &self.form
    }

    pub const fn form_mut(&mut self) -> &mut VenueForm {
        &mut self.form
    }

    #[must_use]
    pub fn find_venue(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == id)
    }

    /// Forget everything loaded for the previous identity.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation.wrapping_add(1),
            ..Self::default()
        };
    }

    /// Reload the venue listing and recompute the owner's subset.
    pub async fn load_venues(&mut self, backend: &dyn Backend, identity: &Identity) {
        match list_venues(backend).await {
            Ok(venues) => {
                self.my_venues = if identity.role.can_create_venues() {
                    owned_by(&venues, &identity.id)
                } else {
                    Vec::new()
                };
                tracing::debug!(
                    count = venues.len(),
                    mine = self.my_venues.len(),
                    "restaurants loaded"
                );
                self.venues = venues;
            }
            Err(error) => tracing::error!(%error, "failed to load restaurants"),
        }
    }

    /// Start a menu fetch for `venue`, invalidating any earlier one.
    pub fn begin_menu_request(&mut self, venue: &Venue) -> MenuRequest {
        self.generation = self.generation.wrapping_add(1);
        self.entries.clear();
        MenuRequest {
            generation: self.generation,
            venue_id: venue.id.clone(),
        }
    }

    /// Apply the outcome of `request`. Returns `false` when the request was
    /// superseded and its result dropped.
    pub fn apply_menu(
        &mut self,
        request: &MenuRequest,
        result: Result<Vec<MenuEntry>, BackendError>,
    ) -> bool {
        if request.generation != self.generation {
            tracing::debug!(venue = %request.venue_id, "discarding stale menu response");
            return false;
        }
        match result {
            Ok(entries) => self.entries = entries,
            Err(error) => {
                tracing::error!(%error, venue = %request.venue_id, "failed to load menu items");
                self.entries.clear();
            }
        }
        true
    }

    /// Fetch the menu of `venue`. Returns `false` if the response arrived
    /// after a newer selection.
    pub async fn select_venue(&mut self, backend: &dyn Backend, venue: &Venue) -> bool {
        let request = self.begin_menu_request(venue);
        let result = list_menu_entries(backend, &request.venue_id).await;
        self.apply_menu(&request, result)
    }

    /// Drop the menu and invalidate any in-flight fetch.
    pub fn back(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.entries.clear();
    }

    /// Submit the form as a new venue owned by `identity`.
    ///
    /// On success the form is cleared and the listing reloaded. On failure
    /// the form is kept and the user is alerted.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotPermitted`] for roles that cannot create venues
    /// - [`AppError::VenueValidation`] for a blank name
    /// - [`AppError::Backend`] when the backend rejects the create
    pub async fn create_venue(
        &mut self,
        backend: &dyn Backend,
        notifier: &dyn Notifier,
        identity: &Identity,
    ) -> Result<Venue, AppError> {
        if !identity.role.can_create_venues() {
            return Err(AppError::NotPermitted {
                role: identity.role,
            });
        }
        let payload = self.form.to_new_venue()?;

        match create_venue(backend, &payload).await {
            Ok(venue) => {
                tracing::info!(id = %venue.id, name = %venue.name, "restaurant created");
                self.form.reset();
                self.load_venues(backend, identity).await;
                Ok(venue)
            }
            Err(error) => {
                tracing::error!(%error, "failed to create restaurant");
                notifier.alert(&Alert::create_venue_failed());
                Err(error.into())
            }
        }
    }
}

/// Venues whose joined owner is `owner_id`. Venues without an owner never
/// match.
#[must_use]
pub fn owned_by(venues: &[Venue], owner_id: &str) -> Vec<Venue> {
    venues
        .iter()
        .filter(|venue| venue.is_owned_by(owner_id))
        .cloned()
        .collect()
}
