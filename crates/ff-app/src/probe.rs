//! Backend connectivity probe.
//!
//! Runs once at startup. The result only drives the status indicator and
//! whether session resolution is attempted; there is no retry loop.

use ff_backend::Backend;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Connectivity {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Connectivity {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.connected {
            "Connected"
        } else {
            "Disconnected"
        }
    }
}

/// Ping the backend and report reachability.
pub async fn probe(backend: &dyn Backend) -> Connectivity {
    tracing::info!("starting backend connection test");
    match backend.ping().await {
        Ok(()) => {
            tracing::info!("backend connection successful");
            Connectivity {
                connected: true,
                error: None,
            }
        }
        Err(error) => {
            tracing::error!(%error, "backend connection failed; app may not function correctly");
            Connectivity {
                connected: false,
                error: Some(error.to_string()),
            }
        }
    }
}
