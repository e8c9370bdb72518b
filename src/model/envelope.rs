use serde::{Deserialize, Serialize};
use tracing::warn;

use super::lenient;

/// A page of results as produced by the backend's paginated list views.
///
/// Only `results` is required. Cursor fields of an unexpected type are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub next: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// The body of a list endpoint.
///
/// Some list views paginate and some return a bare array, depending on the
/// backend's configuration. Bodies that match neither shape are kept as
/// [`ListResponse::Unrecognized`] instead of failing the request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Paginated(PageEnvelope<T>),
    Unrecognized(serde_json::Value),
}

impl<T> ListResponse<T> {
    /// Flatten the response into its items.
    ///
    /// An unrecognized body yields no items.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Paginated(page) => page.results,
            ListResponse::Unrecognized(value) => {
                warn!(kind = json_kind(&value), "unrecognized list response shape");
                Vec::new()
            }
        }
    }

    /// Total number of items on the server, when the backend reports it.
    pub fn total_count(&self) -> Option<u64> {
        match self {
            ListResponse::Bare(items) => Some(items.len() as u64),
            ListResponse::Paginated(page) => page.count,
            ListResponse::Unrecognized(_) => None,
        }
    }

    /// Cursor URL of the next page, if any.
    pub fn next_page(&self) -> Option<&str> {
        match self {
            ListResponse::Paginated(page) => page.next.as_deref(),
            _ => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ListResponse::Unrecognized(_))
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        ListResponse::Bare(items)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
