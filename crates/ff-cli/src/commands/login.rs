use anyhow::Context;
use ff_app::App;
use ff_core::Credentials;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::output::output_screen;

/// Handle `flavorfind login`, then show the dashboard it leads to.
pub async fn handle(args: &LoginArgs, app: &mut App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = match args.demo {
        Some(choice) => app.login_demo(choice.into()).await,
        None => {
            let credentials = Credentials::try_from_parts(
                args.email.as_deref().unwrap_or_default(),
                args.password.as_deref().unwrap_or_default(),
            )?;
            app.login(&credentials).await
        }
    };
    result.context("login failed")?;

    output_screen(&app.screen(), flags.format)
}
