/// All errors that can occur while talking to the prediction backend.
#[derive(thiserror::Error, Debug)]
pub enum PredictorError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
        /// The `error` field of the response body, when the backend sent one.
        message: Option<String>,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body did not match the declared shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A request URL could not be built from the base URL and query.
    #[error("invalid request url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to parse a calendar date from user input.
    #[error("failed to parse date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// The request was aborted before it completed.
    #[error("request was cancelled")]
    Cancelled,

    /// The task driving the request panicked.
    #[error("request task failed: {0}")]
    Task(String),
}

impl PredictorError {
    /// The human-readable message the backend attached to a failed response.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            PredictorError::UnexpectedStatus { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The backend message, or `fallback` when there is none.
    pub(crate) fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PredictorError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, PredictorError>;
