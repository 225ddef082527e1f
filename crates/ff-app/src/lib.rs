//! # ff-app
//!
//! Application state for FlavorFind, independent of any rendering surface.
//!
//! - [`probe`]: backend reachability, checked once at startup
//! - [`session`]: startup session resolution, login, logout
//! - [`router`]: the `Landing` / `Dashboard` view state machine
//! - [`dashboard`]: venue and menu loading with stale-response protection
//! - [`screen`]: serializable render model of the active view
//!
//! [`App`] ties these together around an explicit [`AppContext`].

pub mod app;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod notifier;
pub mod probe;
pub mod router;
pub mod screen;
pub mod session;

pub use app::App;
pub use context::AppContext;
pub use error::AppError;
pub use notifier::{Alert, AlertKind, Notifier, RecordingNotifier};
pub use probe::Connectivity;
pub use router::{DashboardVariant, View};
pub use screen::Screen;
pub use session::DemoAccount;
