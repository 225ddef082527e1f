//! REST client for the hosted backend.
//!
//! Endpoints used:
//! - `GET  /api/health`: reachability
//! - `GET  /api/collections/{slug}?…`: listings
//! - `POST /api/collections/{slug}`: create
//! - `POST /api/auth/users/login`: returns `{ "token": … }`
//! - `GET  /api/auth/users/me`: identity behind the bearer token
//!
//! Logout is client-side: the token is dropped from memory and the store.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use ff_config::BackendConfig;
use ff_core::{Credentials, Identity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{check_response, decode_json};
use crate::{Backend, BackendError, Entity, FindQuery, Page, TokenStore};

const APP_ID_HEADER: &str = "x-app-id";

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// HTTP implementation of [`Backend`].
pub struct ManifestClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    page_size: u32,
    token: RwLock<Option<String>>,
    store: Option<TokenStore>,
}

impl ManifestClient {
    /// Build a client from backend configuration. No request is made.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("flavorfind/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base().to_string(),
            app_id: config.app_id.clone(),
            page_size: config.page_size,
            token: RwLock::new(None),
            store: None,
        })
    }

    /// Persist the session through `store` and pick up any token it holds.
    #[must_use]
    pub fn with_token_store(mut self, store: TokenStore) -> Self {
        let stored = store.load();
        if stored.is_some() {
            tracing::debug!(source = ?store.detect_source(), "loaded stored session token");
        }
        self.token = RwLock::new(stored);
        self.store = Some(store);
        self
    }

    /// Whether a session token is currently held.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.current_token().is_some()
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn current_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header(APP_ID_HEADER, &self.app_id);
        match self.current_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn forget_stored_token(&self) {
        self.set_token(None);
        if let Some(store) = &self.store
            && let Err(error) = store.delete()
        {
            tracing::warn!(%error, "failed to remove stored session token");
        }
    }
}

#[async_trait]
impl Backend for ManifestClient {
    async fn ping(&self) -> Result<(), BackendError> {
        let url = self.api_url("health");
        check_response(self.request(reqwest::Method::GET, &url).send().await?).await?;
        Ok(())
    }

    async fn find(&self, entity: Entity, query: &FindQuery) -> Result<Page<Value>, BackendError> {
        let url = format!(
            "{}?{}",
            self.api_url(&format!("collections/{}", entity.slug())),
            query.to_query_string(self.page_size)
        );
        tracing::debug!(%entity, %url, "find");
        let resp = check_response(self.request(reqwest::Method::GET, &url).send().await?).await?;
        decode_json(resp, &format!("{entity} page")).await
    }

    async fn create(&self, entity: Entity, data: Value) -> Result<Value, BackendError> {
        let url = self.api_url(&format!("collections/{}", entity.slug()));
        tracing::debug!(%entity, "create");
        let resp = check_response(
            self.request(reqwest::Method::POST, &url)
                .json(&data)
                .send()
                .await?,
        )
        .await?;
        decode_json(resp, &format!("created {entity}")).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), BackendError> {
        let url = self.api_url(&format!("auth/{}/login", Entity::User.slug()));
        let body = LoginBody {
            email: credentials.email(),
            password: credentials.password(),
        };
        let resp = check_response(
            self.http
                .post(&url)
                .header(APP_ID_HEADER, &self.app_id)
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        let LoginResponse { token } = decode_json(resp, "login response").await?;

        if let Some(store) = &self.store
            && let Err(error) = store.store(&token)
        {
            tracing::warn!(%error, "session token kept in memory only");
        }
        self.set_token(Some(token));
        tracing::info!(email = credentials.email(), "logged in");
        Ok(())
    }

    async fn logout(&self) -> Result<(), BackendError> {
        self.set_token(None);
        match &self.store {
            Some(store) => store.delete(),
            None => Ok(()),
        }
    }

    async fn me(&self) -> Result<Identity, BackendError> {
        if !self.has_token() {
            return Err(BackendError::NotAuthenticated);
        }

        let url = self.api_url(&format!("auth/{}/me", Entity::User.slug()));
        let resp = match check_response(self.request(reqwest::Method::GET, &url).send().await?).await
        {
            Ok(resp) => resp,
            Err(error) => {
                if error.is_auth() {
                    tracing::debug!(%error, "session token rejected; discarding it");
                    self.forget_stored_token();
                }
                return Err(error);
            }
        };
        decode_json(resp, "session identity").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> BackendConfig {
        BackendConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    #[test]
    fn api_urls_are_built_from_trimmed_base() {
        let client = ManifestClient::new(&config("https://backend.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://backend.example.com");
        assert_eq!(
            client.api_url("collections/restaurants"),
            "https://backend.example.com/api/collections/restaurants"
        );
    }

    #[tokio::test]
    async fn me_without_token_short_circuits() {
        let client = ManifestClient::new(&config("http://127.0.0.1:9")).unwrap();
        assert!(!client.has_token());
        assert!(matches!(client.me().await, Err(BackendError::NotAuthenticated)));
    }

    #[tokio::test]
    async fn logout_without_session_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let client = ManifestClient::new(&config("http://127.0.0.1:9"))
            .unwrap()
            .with_token_store(TokenStore::file_only(tmp.path().join("session")));
        assert!(client.logout().await.is_ok());
        assert!(!client.has_token());
    }

    #[test]
    fn stored_token_is_picked_up() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session");
        std::fs::write(&path, "tok_saved").expect("write");

        let client = ManifestClient::new(&config("http://127.0.0.1:9"))
            .unwrap()
            .with_token_store(TokenStore::file_only(&path));
        assert!(client.has_token());
    }
}
