use ff_config::BackendConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AdminUrlResponse {
    admin_url: String,
}

/// Handle `flavorfind admin-url`. Needs no backend round trip.
pub fn handle(backend: &BackendConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &AdminUrlResponse {
            admin_url: backend.admin_url(),
        },
        flags.format,
    )
}
