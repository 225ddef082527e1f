use clap::{Args, Subcommand};

/// Restaurant commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VenuesCommands {
    /// List restaurants, newest first.
    List(VenueListArgs),
    /// Add a restaurant (owners only).
    Create(VenueCreateArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct VenueListArgs {
    /// Only restaurants you own.
    #[arg(long)]
    pub mine: bool,
}

#[derive(Clone, Debug, Args)]
pub struct VenueCreateArgs {
    /// Restaurant name.
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub address: String,
}
