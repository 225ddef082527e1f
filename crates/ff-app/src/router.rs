//! View state machine.
//!
//! ```text
//! Landing ──enter(identity)──▶ Dashboard { selected: None }
//!    ▲                           │     ▲
//!    └──────────leave────────────┘     │ back
//!                                select(venue)
//!                                      ▼
//!                             Dashboard { selected: Some(venue) }
//! ```
//!
//! Whether a dashboard browses or manages venues is decided by the
//! identity's role, never by a separate flag.

use ff_core::{CoreError, Identity, Role, Venue};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    /// All venues; selecting one shows its menu with ordering.
    Browse,
    /// Create form plus the owner's own venues.
    Manage,
}

impl DashboardVariant {
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Diner => Self::Browse,
            Role::Owner => Self::Manage,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Landing,
    Dashboard {
        identity: Identity,
        selected: Option<Venue>,
    },
}

impl View {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Dashboard { selected: None, .. } => "dashboard",
            Self::Dashboard {
                selected: Some(_), ..
            } => "venue detail",
        }
    }

    #[must_use]
    pub const fn is_landing(&self) -> bool {
        matches!(self, Self::Landing)
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Landing => None,
            Self::Dashboard { identity, .. } => Some(identity),
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Venue> {
        match self {
            Self::Dashboard {
                selected: Some(venue),
                ..
            } => Some(venue),
            _ => None,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Option<DashboardVariant> {
        self.identity()
            .map(|identity| DashboardVariant::for_role(identity.role))
    }

    /// Show the dashboard for `identity`, dropping any selection.
    pub fn enter(&mut self, identity: Identity) {
        *self = Self::Dashboard {
            identity,
            selected: None,
        };
    }

    /// Return to the landing view.
    pub fn leave(&mut self) {
        *self = Self::Landing;
    }

    /// Open a venue's detail.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] from the landing view.
    pub fn select(&mut self, venue: Venue) -> Result<(), CoreError> {
        match self {
            Self::Dashboard { selected, .. } => {
                *selected = Some(venue);
                Ok(())
            }
            Self::Landing => Err(self.invalid("select a restaurant")),
        }
    }

    /// Close the venue detail, returning the venue that was open.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless a venue is selected.
    pub fn back(&mut self) -> Result<Venue, CoreError> {
        if let Self::Dashboard { selected, .. } = self
            && let Some(venue) = selected.take()
        {
            return Ok(venue);
        }
        Err(self.invalid("go back"))
    }

    fn invalid(&self, action: &str) -> CoreError {
        CoreError::InvalidTransition {
            from: self.name().to_string(),
            action: action.to_string(),
        }
    }
}
