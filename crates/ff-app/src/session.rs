//! Session resolution, login, and logout.
//!
//! A missing or rejected session is the normal unauthenticated state and is
//! logged at `info`. A failed login raises an alert. Logout always lands on
//! the landing view, even when the backend call fails.

use ff_backend::{Backend, BackendError};
use ff_core::{Credentials, CredentialsError, Identity, Role};
use serde::Serialize;

use crate::app::App;
use crate::error::AppError;
use crate::notifier::Alert;

/// Password shared by the seeded demo accounts.
pub const DEMO_PASSWORD: &str = "password";

/// Seeded accounts offered on the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoAccount {
    Diner,
    Owner,
}

impl DemoAccount {
    pub const ALL: [Self; 2] = [Self::Diner, Self::Owner];

    #[must_use]
    pub const fn email(self) -> &'static str {
        match self {
            Self::Diner => "diner@example.com",
            Self::Owner => "owner@example.com",
        }
    }

    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Diner => Role::Diner,
            Self::Owner => Role::Owner,
        }
    }

    /// # Errors
    ///
    /// Never fails for the built-in accounts; kept fallible to share the
    /// credential validation path.
    pub fn credentials(self) -> Result<Credentials, CredentialsError> {
        Credentials::try_from_parts(self.email(), DEMO_PASSWORD)
    }
}

async fn authenticate(
    backend: &dyn Backend,
    credentials: &Credentials,
) -> Result<Identity, BackendError> {
    backend.login(credentials).await?;
    backend.me().await
}

impl App {
    /// Ask the backend who is logged in and route accordingly.
    pub async fn resolve_session(&mut self) -> Option<&Identity> {
        let backend = std::sync::Arc::clone(&self.ctx.backend);
        match backend.me().await {
            Ok(identity) => {
                tracing::info!(email = %identity.email, role = %identity.role, "active session found");
                self.enter_dashboard(identity).await;
            }
            Err(error) => {
                tracing::info!(%error, "no active session found");
                self.view.leave();
                self.dashboard.reset();
            }
        }
        self.view.identity()
    }

    /// Log in and show the dashboard for the resulting identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Backend`] when the credentials are rejected or the
    /// identity lookup fails. The user is alerted and left on the landing
    /// view.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<Identity, AppError> {
        let backend = std::sync::Arc::clone(&self.ctx.backend);
        match authenticate(backend.as_ref(), credentials).await {
            Ok(identity) => {
                self.enter_dashboard(identity.clone()).await;
                Ok(identity)
            }
            Err(error) => {
                tracing::error!(%error, email = credentials.email(), "login failed");
                self.view.leave();
                self.dashboard.reset();
                self.ctx.notifier.alert(&Alert::login_failed());
                Err(error.into())
            }
        }
    }

    /// Log in with one of the seeded accounts.
    ///
    /// # Errors
    ///
    /// Same as [`App::login`].
    pub async fn login_demo(&mut self, account: DemoAccount) -> Result<Identity, AppError> {
        let credentials = account.credentials()?;
        self.login(&credentials).await
    }

    /// End the session and return to the landing view.
    pub async fn logout(&mut self) {
        if let Err(error) = self.ctx.backend.logout().await {
            tracing::warn!(%error, "backend logout failed; clearing session anyway");
        }
        self.view.leave();
        self.dashboard.reset();
        tracing::info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_accounts_use_seeded_credentials() {
        let owner = DemoAccount::Owner.credentials().unwrap();
        assert_eq!(owner.email(), "owner@example.com");
        assert_eq!(owner.password(), "password");
        assert_eq!(DemoAccount::Diner.role(), Role::Diner);
    }
}
