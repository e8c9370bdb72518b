use tracing::debug;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "PREDICTOR_API_URL";

/// Base URL used when [`API_URL_ENV`] is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Connection settings for [`crate::PredictorClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the environment, falling back to the local default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                debug!(url, "using api url from environment");
                Self::new(url.trim())
            }
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
