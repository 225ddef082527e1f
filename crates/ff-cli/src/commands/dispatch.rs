use ff_app::{App, AppContext};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Run the startup sequence, then hand the app to the command handler.
pub async fn dispatch(
    command: Commands,
    ctx: AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut app = App::start(ctx).await;

    match command {
        Commands::Status => commands::status::handle(&app, flags),
        Commands::Login(args) => commands::login::handle(&args, &mut app, flags).await,
        Commands::Logout => commands::logout::handle(&mut app, flags).await,
        Commands::Dashboard => commands::dashboard::handle(&app, flags),
        Commands::Venues { action } => commands::venues::handle(&action, &mut app, flags).await,
        Commands::Menu(args) => commands::menu::handle(&args, &mut app, flags).await,
        Commands::AdminUrl => commands::admin_url::handle(&app.context().config.backend, flags),
        Commands::Shell => commands::shell::handle(&mut app, flags).await,
    }
}
