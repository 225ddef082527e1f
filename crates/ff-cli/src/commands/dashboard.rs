use ff_app::App;

use crate::cli::GlobalFlags;
use crate::output::output_screen;

/// Handle `flavorfind dashboard`: render whatever view the session resolved to.
pub fn handle(app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_screen(&app.screen(), flags.format)
}
