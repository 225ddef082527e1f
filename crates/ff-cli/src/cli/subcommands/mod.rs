mod venues;

pub use venues::{VenueCreateArgs, VenueListArgs, VenuesCommands};
