use std::sync::Arc;

use anyhow::Context;
use ff_app::AppContext;
use ff_backend::{ManifestClient, TokenStore};
use ff_config::FlavorConfig;

use crate::notifier::StderrNotifier;

/// Load `.env`, the config files and `FLAVORFIND_*` overrides.
pub fn load_config() -> anyhow::Result<FlavorConfig> {
    FlavorConfig::load_with_dotenv().context("failed to load flavorfind configuration")
}

/// Build the backend client and the shared application context.
pub fn build_context(config: FlavorConfig) -> anyhow::Result<AppContext> {
    let mut client =
        ManifestClient::new(&config.backend).context("failed to build backend client")?;
    if config.session.persist {
        client = client.with_token_store(TokenStore::new(config.session.keyring_service.clone()));
    }
    tracing::debug!(base_url = client.base_url(), "backend client ready");

    Ok(AppContext::new(
        config,
        Arc::new(client),
        Arc::new(StderrNotifier),
    ))
}
