//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so the client methods stay focused on
//! request construction and response mapping:
//! - **401 / 403** → [`BackendError::Unauthorized`]
//! - **other non-success** → [`BackendError::Api`]

use serde::de::DeserializeOwned;

use crate::error::BackendError;

/// Check an HTTP response for error statuses, returning it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let status = status.as_u16();
    let message = extract_message(&resp.text().await.unwrap_or_default());
    if matches!(status, 401 | 403) {
        return Err(BackendError::Unauthorized { status, message });
    }
    Err(BackendError::Api { status, message })
}

/// Read the body and decode it as JSON, naming `what` in decode errors.
pub async fn decode_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> Result<T, BackendError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| BackendError::Decode(format!("{what}: {e}")))
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers with `{"message": "..."}` or, for validation
/// failures, `{"message": ["...", "..."]}`. Anything else is returned as-is.
fn extract_message(body: &str) -> String {
    let trimmed = body.trim();
    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return trimmed.to_string();
    };

    match value.get("message") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map_or_else(|| item.to_string(), ToString::to_string)
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => trimmed.to_string(),
    }
}
