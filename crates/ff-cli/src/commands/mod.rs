pub mod admin_url;
pub mod dashboard;
pub mod dispatch;
pub mod login;
pub mod logout;
pub mod menu;
pub mod shell;
pub mod status;
pub mod venues;

use ff_app::App;
use ff_core::Identity;

/// The logged-in identity, or an error pointing at `flavorfind login`.
pub fn require_login(app: &App) -> anyhow::Result<&Identity> {
    app.identity().ok_or_else(|| {
        anyhow::anyhow!("not logged in; run `flavorfind login --demo diner` or `--email/--password` first")
    })
}
