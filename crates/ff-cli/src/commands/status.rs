use ff_app::App;
use ff_core::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    backend: String,
    connected: bool,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    view: &'static str,
    user: Option<String>,
    role: Option<Role>,
}

impl StatusResponse {
    pub fn from_app(app: &App) -> Self {
        let connectivity = app.connectivity();
        let identity = app.identity();
        Self {
            backend: app.context().config.backend.base().to_string(),
            connected: connectivity.connected,
            status: connectivity.label(),
            error: connectivity.error.clone(),
            view: app.view().name(),
            user: identity.map(|identity| identity.display_name().to_string()),
            role: identity.map(|identity| identity.role),
        }
    }
}

/// Handle `flavorfind status`.
pub fn handle(app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&StatusResponse::from_app(app), flags.format)
}
