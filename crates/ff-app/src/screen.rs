//! Render model of the active view.
//!
//! A [`Screen`] holds everything a front end needs to draw the current
//! state, with display fallbacks (placeholder images, `N/A` owners,
//! formatted prices) already applied.

use ff_core::{Identity, MenuEntry, Role, Venue};
use serde::Serialize;

use crate::app::App;
use crate::form::VenueForm;
use crate::probe::Connectivity;
use crate::router::{DashboardVariant, View};
use crate::session::{DEMO_PASSWORD, DemoAccount};

pub const APP_TITLE: &str = "FlavorFind";
pub const EMPTY_MENU_MESSAGE: &str = "No menu items found for this restaurant.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    pub connected: bool,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Connectivity> for StatusIndicator {
    fn from(connectivity: &Connectivity) -> Self {
        Self {
            connected: connectivity.connected,
            label: connectivity.label(),
            error: connectivity.error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub role: Role,
    pub role_label: &'static str,
}

impl From<&Identity> for Header {
    fn from(identity: &Identity) -> Self {
        Self {
            name: identity.display_name().to_string(),
            role: identity.role,
            role_label: identity.role.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoCard {
    pub account: DemoAccount,
    pub email: &'static str,
    pub password: &'static str,
}

impl DemoCard {
    #[must_use]
    pub const fn account_label(&self) -> &'static str {
        self.account.role().label()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub cover_url: String,
    pub owner: String,
}

impl From<&Venue> for VenueCard {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id.clone(),
            name: venue.name.clone(),
            description: venue.description.clone(),
            address: venue.address.clone(),
            cover_url: venue.cover_url().to_string(),
            owner: venue.owner_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuLine {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub photo_url: String,
}

impl From<&MenuEntry> for MenuLine {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            price: entry.display_price(),
            photo_url: entry.photo_url().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Landing {
        status: StatusIndicator,
        title: &'static str,
        admin_url: String,
        demo_accounts: Vec<DemoCard>,
    },
    Browse {
        status: StatusIndicator,
        header: Header,
        venues: Vec<VenueCard>,
    },
    Manage {
        status: StatusIndicator,
        header: Header,
        form: VenueForm,
        my_venues: Vec<VenueCard>,
    },
    VenueDetail {
        status: StatusIndicator,
        header: Header,
        venue: VenueCard,
        entries: Vec<MenuLine>,
        /// Diners get an order action on every entry.
        can_order: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        empty_message: Option<&'static str>,
    },
}

impl Screen {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Landing { .. } => "landing",
            Self::Browse { .. } => "browse",
            Self::Manage { .. } => "manage",
            Self::VenueDetail { .. } => "venue_detail",
        }
    }

    #[must_use]
    pub const fn status(&self) -> &StatusIndicator {
        match self {
            Self::Landing { status, .. }
            | Self::Browse { status, .. }
            | Self::Manage { status, .. }
            | Self::VenueDetail { status, .. } => status,
        }
    }
}

impl App {
    /// Render model of the current view.
    #[must_use]
    pub fn screen(&self) -> Screen {
        let status = StatusIndicator::from(&self.connectivity);
        let View::Dashboard { identity, selected } = &self.view else {
            return Screen::Landing {
                status,
                title: APP_TITLE,
                admin_url: self.ctx.admin_url(),
                demo_accounts: DemoAccount::ALL
                    .iter()
                    .map(|&account| DemoCard {
                        account,
                        email: account.email(),
                        password: DEMO_PASSWORD,
                    })
                    .collect(),
            };
        };

        let header = Header::from(identity);
        if let Some(venue) = selected {
            let entries: Vec<MenuLine> = self.dashboard.entries().iter().map(MenuLine::from).collect();
            return Screen::VenueDetail {
                status,
                header,
                venue: VenueCard::from(venue),
                empty_message: entries.is_empty().then_some(EMPTY_MENU_MESSAGE),
                entries,
                can_order: identity.role.can_order(),
            };
        }

        match DashboardVariant::for_role(identity.role) {
            DashboardVariant::Browse => Screen::Browse {
                status,
                header,
                venues: self.dashboard.venues().iter().map(VenueCard::from).collect(),
            },
            DashboardVariant::Manage => Screen::Manage {
                status,
                header,
                form: self.dashboard.form().clone(),
                my_venues: self
                    .dashboard
                    .my_venues()
                    .iter()
                    .map(VenueCard::from)
                    .collect(),
            },
        }
    }
}
