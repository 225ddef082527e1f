use anyhow::Context;
use ff_app::App;
use ff_app::screen::VenueCard;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{VenueCreateArgs, VenueListArgs, VenuesCommands};
use crate::commands::require_login;
use crate::output::output;

/// Handle `flavorfind venues <subcommand>`.
pub async fn handle(
    action: &VenuesCommands,
    app: &mut App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VenuesCommands::List(args) => list(args, app, flags),
        VenuesCommands::Create(args) => create(args, app, flags).await,
    }
}

fn list(args: &VenueListArgs, app: &App, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require_login(app)?;
    if args.mine && !identity.role.can_create_venues() {
        anyhow::bail!("only owners have restaurants of their own");
    }

    let dashboard = app.dashboard();
    let venues = if args.mine {
        dashboard.my_venues()
    } else {
        dashboard.venues()
    };
    let cards: Vec<VenueCard> = venues.iter().map(VenueCard::from).collect();
    output(&cards, flags.format)
}

/// Fill the create form from `args` and submit it.
pub async fn create(
    args: &VenueCreateArgs,
    app: &mut App,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_login(app)?;

    let form = app.dashboard_mut().form_mut();
    form.name.clone_from(&args.name);
    form.description.clone_from(&args.description);
    form.address.clone_from(&args.address);

    let venue = app
        .create_venue()
        .await
        .context("could not create restaurant")?;
    output(&VenueCard::from(&venue), flags.format)
}
