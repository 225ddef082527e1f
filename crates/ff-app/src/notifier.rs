//! User-facing alerts.
//!
//! Only two failures interrupt the user: a rejected login and a failed
//! create-venue. Everything else is logged and degrades to an empty or
//! unauthenticated view.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const CREATE_VENUE_FAILED_MESSAGE: &str = "Could not create restaurant.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LoginFailed,
    CreateVenueFailed,
}

/// A blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn login_failed() -> Self {
        Self {
            kind: AlertKind::LoginFailed,
            message: LOGIN_FAILED_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn create_venue_failed() -> Self {
        Self {
            kind: AlertKind::CreateVenueFailed,
            message: CREATE_VENUE_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Surface that shows alerts to the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, alert: &Alert);
}

/// Keeps alerts in memory until they are taken.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the alerts raised so far.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain the alerts raised so far.
    pub fn take(&self) -> Vec<Alert> {
        std::mem::take(&mut *self.alerts.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, alert: &Alert) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(alert.clone());
    }
}
