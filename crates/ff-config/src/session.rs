//! Session persistence configuration.

use serde::{Deserialize, Serialize};

const fn default_persist() -> bool {
    true
}

fn default_keyring_service() -> String {
    "flavorfind".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Keep the session token between invocations.
    #[serde(default = "default_persist")]
    pub persist: bool,

    /// Keyring service name the token is stored under.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: default_persist(),
            keyring_service: default_keyring_service(),
        }
    }
}
