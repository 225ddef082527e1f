//! Application root.

use std::sync::Arc;

use ff_core::{Identity, Venue};

use crate::context::AppContext;
use crate::dashboard::Dashboard;
use crate::error::AppError;
use crate::probe::{Connectivity, probe};
use crate::router::View;

/// The running application: connectivity, active view, dashboard data.
pub struct App {
    pub(crate) ctx: AppContext,
    pub(crate) connectivity: Connectivity,
    pub(crate) view: View,
    pub(crate) dashboard: Dashboard,
}

impl App {
    /// An app on the landing view that has not contacted the backend yet.
    #[must_use]
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            connectivity: Connectivity::default(),
            view: View::Landing,
            dashboard: Dashboard::default(),
        }
    }

    /// Build the app and run the startup sequence.
    pub async fn start(ctx: AppContext) -> Self {
        let mut app = Self::new(ctx);
        app.boot().await;
        app
    }

    /// Probe the backend, then resolve the session if it is reachable.
    pub async fn boot(&mut self) {
        self.connectivity = probe(self.ctx.backend.as_ref()).await;
        if self.connectivity.connected {
            self.resolve_session().await;
        } else {
            tracing::warn!("skipping session check; backend unreachable");
        }
    }

    #[must_use]
    pub const fn context(&self) -> &AppContext {
        &self.ctx
    }

    #[must_use]
    pub const fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.view.identity()
    }

    #[must_use]
    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub const fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    /// Open a venue from the current listing and load its menu.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotLoggedIn`] on the landing view
    /// - [`AppError::UnknownVenue`] when `venue_id` is not listed
    pub async fn select_venue(&mut self, venue_id: &str) -> Result<&Venue, AppError> {
        if self.view.is_landing() {
            return Err(AppError::NotLoggedIn);
        }
        let venue = self
            .dashboard
            .find_venue(venue_id)
            .cloned()
            .ok_or_else(|| AppError::UnknownVenue(venue_id.to_string()))?;

        self.view.select(venue.clone())?;
        let backend = Arc::clone(&self.ctx.backend);
        self.dashboard.select_venue(backend.as_ref(), &venue).await;
        self.view.selected().ok_or(AppError::NotLoggedIn)
    }

    /// Close the venue detail.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Core`] when no venue is open.
    pub fn back(&mut self) -> Result<(), AppError> {
        self.view.back()?;
        self.dashboard.back();
        Ok(())
    }

    /// Reload the listing, and the open menu if any.
    pub async fn refresh(&mut self) {
        let Some(identity) = self.view.identity().cloned() else {
            return;
        };
        let backend = Arc::clone(&self.ctx.backend);
        self.dashboard.load_venues(backend.as_ref(), &identity).await;
        if let Some(venue) = self.view.selected().cloned() {
            self.dashboard.select_venue(backend.as_ref(), &venue).await;
        }
    }

    /// Submit the create-venue form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotLoggedIn`] on the landing view, otherwise see
    /// [`Dashboard::create_venue`].
    pub async fn create_venue(&mut self) -> Result<Venue, AppError> {
        let identity = self.view.identity().cloned().ok_or(AppError::NotLoggedIn)?;
        let backend = Arc::clone(&self.ctx.backend);
        self.dashboard
            .create_venue(backend.as_ref(), self.ctx.notifier.as_ref(), &identity)
            .await
    }

    pub(crate) async fn enter_dashboard(&mut self, identity: Identity) {
        self.dashboard.reset();
        let backend = Arc::clone(&self.ctx.backend);
        self.dashboard.load_venues(backend.as_ref(), &identity).await;
        self.view.enter(identity);
    }
}
