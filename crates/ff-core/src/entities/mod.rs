//! Entity structs mirroring the backend collections.

mod identity;
mod image;
mod menu_entry;
mod venue;

pub use identity::{Identity, OwnerRef};
pub use image::{ImageRef, ImageSource};
pub use menu_entry::{MENU_PHOTO_PLACEHOLDER, MenuEntry};
pub use venue::{NewVenue, VENUE_COVER_PLACEHOLDER, Venue};
