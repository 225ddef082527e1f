//! # Integration tests for `ManifestClient`
//!
//! A fake backend runs on `tiny_http` (`127.0.0.1:0`) in a background thread,
//! answers from a route table, and records every request it sees.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use ff_backend::collections::{create_venue, list_menu_entries, list_venues};
use ff_backend::{Backend, BackendError, ManifestClient, TokenStore};
use ff_config::BackendConfig;
use ff_core::{Credentials, NewVenue, Role};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    url: String,
    authorization: Option<String>,
    app_id: Option<String>,
    body: String,
}

type Route = dyn Fn(&str, &str) -> (u16, String) + Send + Sync + 'static;

struct FakeBackend {
    server: Arc<tiny_http::Server>,
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeBackend {
    fn start(route: impl Fn(&str, &str) -> (u16, String) + Send + Sync + 'static) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind fake backend"));
        let port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .expect("ip listener");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let route: Arc<Route> = Arc::new(route);

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let header = |name: &'static str| {
                        request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv(name))
                            .map(|h| h.value.as_str().to_string())
                    };
                    let recorded = Recorded {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        authorization: header("Authorization"),
                        app_id: header("x-app-id"),
                        body,
                    };
                    let (status, payload) = route(&recorded.method, &recorded.url);
                    requests.lock().expect("lock").push(recorded);

                    let response = tiny_http::Response::from_string(payload)
                        .with_status_code(status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", "application/json")
                                .expect("header"),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base_url: format!("http://127.0.0.1:{port}"),
            requests,
            handle: Some(handle),
        }
    }

    fn config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            app_id: "flavorfind-test".into(),
            timeout_secs: 5,
            page_size: 1000,
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("lock").clone()
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn ok(body: &str) -> (u16, String) {
    (200, body.to_string())
}

const DINER: &str =
    r#"{"id":"u-diner","email":"diner@example.com","name":"Dana Diner","role":"diner"}"#;

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ping_hits_health_endpoint_with_app_id() {
    let fake = FakeBackend::start(|_, _| ok(r#"{"status":"OK"}"#));
    let client = ManifestClient::new(&fake.config()).expect("client");

    client.ping().await.expect("ping");

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/api/health");
    assert_eq!(requests[0].app_id.as_deref(), Some("flavorfind-test"));
    assert!(requests[0].authorization.is_none());
}

#[tokio::test]
async fn ping_reports_server_errors() {
    let fake = FakeBackend::start(|_, _| (503, r#"{"message":"maintenance"}"#.into()));
    let client = ManifestClient::new(&fake.config()).expect("client");

    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, BackendError::Api { status: 503, ref message } if message == "maintenance"));
}

#[tokio::test]
async fn ping_reports_unreachable_backend() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let client = ManifestClient::new(&BackendConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: 2,
        ..Default::default()
    })
    .expect("client");

    assert!(matches!(client.ping().await, Err(BackendError::Http(_))));
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_persists_token_and_me_sends_bearer() {
    let fake = FakeBackend::start(|method, url| match (method, url) {
        ("POST", "/api/auth/users/login") => ok(r#"{"token":"tok_diner"}"#),
        ("GET", "/api/auth/users/me") => ok(DINER),
        _ => (404, r#"{"message":"not found"}"#.into()),
    });
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let session_path = tmp.path().join("session");
    let client = ManifestClient::new(&fake.config())
        .expect("client")
        .with_token_store(TokenStore::file_only(&session_path));

    let credentials = Credentials::try_from_parts("diner@example.com", "password").unwrap();
    client.login(&credentials).await.expect("login");
    let identity = client.me().await.expect("me");

    assert_eq!(identity.role, Role::Diner);
    assert_eq!(identity.display_name(), "Dana Diner");
    assert_eq!(
        std::fs::read_to_string(&session_path).expect("session file"),
        "tok_diner"
    );

    let requests = fake.requests();
    let login_body: serde_json::Value =
        serde_json::from_str(&requests[0].body).expect("login body is json");
    assert_eq!(
        login_body,
        serde_json::json!({"email": "diner@example.com", "password": "password"})
    );
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer tok_diner"));

    client.logout().await.expect("logout");
    assert!(!session_path.exists());
    assert!(matches!(client.me().await, Err(BackendError::NotAuthenticated)));
}

#[tokio::test]
async fn rejected_login_keeps_client_unauthenticated() {
    let fake = FakeBackend::start(|_, _| (401, r#"{"message":"Invalid credentials"}"#.into()));
    let client = ManifestClient::new(&fake.config()).expect("client");

    let credentials = Credentials::try_from_parts("diner@example.com", "wrong").unwrap();
    let err = client.login(&credentials).await.unwrap_err();

    assert!(err.is_auth());
    assert!(!client.has_token());
}

#[tokio::test]
async fn expired_token_is_discarded_on_me() {
    let fake = FakeBackend::start(|_, _| (401, r#"{"message":"jwt expired"}"#.into()));
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let session_path = tmp.path().join("session");
    std::fs::write(&session_path, "tok_stale").expect("write");
    let client = ManifestClient::new(&fake.config())
        .expect("client")
        .with_token_store(TokenStore::file_only(&session_path));

    let err = client.me().await.unwrap_err();

    assert!(matches!(err, BackendError::Unauthorized { status: 401, .. }));
    assert!(!client.has_token());
    assert!(!session_path.exists());
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn venue_listing_requests_owner_relation_newest_first() {
    let fake = FakeBackend::start(|_, _| {
        ok(r#"{"data":[{"id":"r1","name":"Trattoria","owner":{"id":"u1","name":"Olivia"}}],"currentPage":1,"lastPage":1,"total":1,"perPage":1000}"#)
    });
    let client = ManifestClient::new(&fake.config()).expect("client");

    let venues = list_venues(&client).await.expect("venues");

    assert_eq!(venues.len(), 1);
    assert_eq!(
        fake.requests()[0].url,
        "/api/collections/restaurants?relations=owner&orderBy=createdAt&order=DESC&perPage=1000"
    );
}

#[tokio::test]
async fn menu_listing_filters_on_restaurant_id() {
    let fake = FakeBackend::start(|_, _| {
        ok(r#"{"data":[{"id":"m1","name":"Carbonara","price":14,"restaurantId":"r1"}]}"#)
    });
    let client = ManifestClient::new(&fake.config()).expect("client");

    let entries = list_menu_entries(&client, "r1").await.expect("entries");

    assert_eq!(entries[0].display_price(), "$14.00");
    assert_eq!(
        fake.requests()[0].url,
        "/api/collections/menu-items?restaurantId_eq=r1&perPage=1000"
    );
}

#[tokio::test]
async fn create_posts_json_and_surfaces_validation_errors() {
    let fake = FakeBackend::start(|method, _| match method {
        "POST" => (
            400,
            r#"{"message":["name must be shorter than or equal to 255 characters"],"statusCode":400}"#
                .into(),
        ),
        _ => (404, String::new()),
    });
    let client = ManifestClient::new(&fake.config()).expect("client");

    let payload = NewVenue::try_new("Bistro", "French", "9 Rue").unwrap();
    let err = create_venue(&client, &payload).await.unwrap_err();

    assert!(matches!(err, BackendError::Api { status: 400, ref message } if message.contains("255")));
    let request = &fake.requests()[0];
    assert_eq!(request.url, "/api/collections/restaurants");
    let body: serde_json::Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(body["name"], "Bistro");
    assert_eq!(body["address"], "9 Rue");
}
