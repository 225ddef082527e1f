//! # ff-config
//!
//! Layered configuration loading for FlavorFind using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FLAVORFIND_*` prefix, `__` as separator)
//! 2. Project-level `.flavorfind/config.toml`
//! 3. User-level `~/.config/flavorfind/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FLAVORFIND_BACKEND__BASE_URL` -> `backend.base_url`,
//! `FLAVORFIND_SESSION__PERSIST` -> `session.persist`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ff_config::FlavorConfig;
//!
//! let config = FlavorConfig::load_with_dotenv().expect("config");
//! println!("admin panel: {}", config.backend.admin_url());
//! ```

mod backend;
mod error;
mod session;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "FLAVORFIND_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlavorConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl FlavorConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.backend.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".flavorfind/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flavorfind").join("config.toml"))
    }
}
