use ff_app::App;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
}

/// Handle `flavorfind logout`. Succeeds even without an active session.
pub async fn handle(app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    app.logout().await;
    output(&LogoutResponse { logged_out: true }, flags.format)
}
