use ff_app::App;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MenuArgs;
use crate::commands::require_login;
use crate::output::output_screen;

/// Handle `flavorfind menu <venue-id>`.
pub async fn handle(args: &MenuArgs, app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_login(app)?;
    app.select_venue(&args.venue_id).await?;
    output_screen(&app.screen(), flags.format)
}
