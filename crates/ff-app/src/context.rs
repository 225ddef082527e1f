use std::sync::Arc;

use ff_backend::Backend;
use ff_config::FlavorConfig;

use crate::notifier::Notifier;

/// Shared resources built once at startup and handed to the views.
#[derive(Clone)]
pub struct AppContext {
    pub config: FlavorConfig,
    pub backend: Arc<dyn Backend>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: FlavorConfig, backend: Arc<dyn Backend>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            backend,
            notifier,
        }
    }

    /// Link to the backend admin panel.
    #[must_use]
    pub fn admin_url(&self) -> String {
        self.config.backend.admin_url()
    }
}
