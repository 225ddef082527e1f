use clap::{Args, Subcommand, ValueEnum};
use ff_app::DemoAccount;

use crate::cli::subcommands::VenuesCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Backend connectivity and current session.
    Status,
    /// Log in with email and password, or as a demo account.
    Login(LoginArgs),
    /// End the current session.
    Logout,
    /// Show the dashboard for the logged-in user.
    Dashboard,
    /// Restaurants.
    Venues {
        #[command(subcommand)]
        action: VenuesCommands,
    },
    /// Show a restaurant's menu.
    Menu(MenuArgs),
    /// Print the backend admin panel URL.
    #[command(name = "admin-url")]
    AdminUrl,
    /// Interactive session over the same views.
    Shell,
}

/// Arguments for `flavorfind login`.
#[derive(Clone, Debug, Args)]
#[command(group(
    clap::ArgGroup::new("account")
        .required(true)
        .args(["email", "demo"])
))]
pub struct LoginArgs {
    #[arg(long, requires = "password")]
    pub email: Option<String>,
    #[arg(long, requires = "email")]
    pub password: Option<String>,
    /// Log in with a seeded demo account.
    #[arg(long, value_enum, conflicts_with_all = ["email", "password"])]
    pub demo: Option<DemoChoice>,
}

/// Demo accounts selectable from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DemoChoice {
    Diner,
    Owner,
}

impl From<DemoChoice> for DemoAccount {
    fn from(choice: DemoChoice) -> Self {
        match choice {
            DemoChoice::Diner => Self::Diner,
            DemoChoice::Owner => Self::Owner,
        }
    }
}

/// Arguments for `flavorfind menu`.
#[derive(Clone, Debug, Args)]
pub struct MenuArgs {
    /// Restaurant id.
    pub venue_id: String,
}
