//! Backend connection configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:1111".to_string()
}

fn default_app_id() -> String {
    "flavorfind".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_page_size() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend (no trailing `/api`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application identifier sent with every request.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size requested on list calls. Listings are fetched in one call,
    /// so this is the effective maximum number of rows shown.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: default_app_id(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl BackendConfig {
    /// Base URL without any trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Link to the backend's admin panel.
    #[must_use]
    pub fn admin_url(&self) -> String {
        format!("{}/admin", self.base())
    }

    /// Reject values that would make every request fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http(s) base URL, an
    /// empty app id, a zero timeout, or a zero page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base();
        let host = base
            .strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"));
        match host {
            None => {
                return Err(invalid(
                    "backend.base_url",
                    "must start with http:// or https://",
                ));
            }
            Some(host) if host.is_empty() => {
                return Err(invalid("backend.base_url", "missing host"));
            }
            Some(_) => {}
        }
        if self.app_id.trim().is_empty() {
            return Err(invalid("backend.app_id", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("backend.timeout_secs", "must be greater than zero"));
        }
        if self.page_size == 0 {
            return Err(invalid("backend.page_size", "must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:1111");
        assert_eq!(config.app_id, "flavorfind");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.page_size, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn admin_url_trims_trailing_slash() {
        let config = BackendConfig {
            base_url: "https://api.flavorfind.test/".into(),
            ..Default::default()
        };
        assert_eq!(config.admin_url(), "https://api.flavorfind.test/admin");
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_scheme = BackendConfig {
            base_url: "localhost:1111".into(),
            ..Default::default()
        };
        assert!(matches!(
            bad_scheme.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "backend.base_url"
        ));

        let no_host = BackendConfig {
            base_url: "http://".into(),
            ..Default::default()
        };
        assert!(no_host.validate().is_err());

        let zero_timeout = BackendConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(zero_timeout.validate().is_err());

        let zero_page = BackendConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(zero_page.validate().is_err());
    }
}
