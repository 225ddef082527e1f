//! Paginated list payload.

use serde::{Deserialize, Serialize};

/// One page of a collection listing.
///
/// Only `data` is required; the pagination counters are kept for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl<T> Page<T> {
    /// A single, complete page holding `data`.
    #[must_use]
    pub const fn from_rows(data: Vec<T>) -> Self {
        Self {
            data,
            current_page: None,
            last_page: None,
            total: None,
            per_page: None,
        }
    }

    /// Whether the backend reported rows beyond this page.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        match (self.current_page, self.last_page) {
            (Some(current), Some(last)) => current < last,
            _ => false,
        }
    }
}
