pub(crate) mod matches;
pub(crate) mod model;
pub(crate) mod predictions;
pub(crate) mod teams;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PredictorError, Result};

/// Error payload the backend attaches to failed responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "detail")]
    error: String,
}

/// Issue a GET and decode the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "GET");
    send_json(request(client, Method::GET, url), url).await
}

/// Issue a GET with query parameters and decode the JSON body.
pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&'static str, String)],
) -> Result<T> {
    if query.is_empty() {
        return get_json(client, url).await;
    }
    let url = Url::parse_with_params(url, query).map_err(|e| PredictorError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    debug!(url = %url, "GET");
    send_json(request(client, Method::GET, url.clone()), url.as_str()).await
}

/// Issue a POST with an optional JSON body and decode the JSON response.
pub(crate) async fn post_json<B, T>(client: &reqwest::Client, url: &str, body: Option<&B>) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    debug!(url, "POST");
    let builder = request(client, Method::POST, url);
    let builder = match body {
        Some(body) => builder.json(body),
        None => builder,
    };
    send_json(builder, url).await
}

/// Every request declares a JSON body, whether or not it carries one.
fn request<U: reqwest::IntoUrl>(client: &reqwest::Client, method: Method, url: U) -> RequestBuilder {
    client
        .request(method, url)
        .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> Result<T> {
    let response = request.send().await.map_err(|e| PredictorError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| PredictorError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    if !status.is_success() {
        return Err(PredictorError::UnexpectedStatus {
            url: url.to_owned(),
            status,
            message: error_message(&body),
        });
    }

    decode(url, &body)
}

/// Decode a response body, treating an empty body as JSON `null`.
pub(crate) fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| PredictorError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

/// Pull the human-readable message out of an error body, if it has one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ListResponse, Team};

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error": "No matches found for training"}"#).as_deref(),
            Some("No matches found for training")
        );
        assert_eq!(
            error_message(r#"{"detail": "Not found."}"#).as_deref(),
            Some("Not found.")
        );
        assert_eq!(error_message(r#"{"team_id": ["This field is required."]}"#), None);
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message(r#"{"error": ""}"#), None);
    }

    #[test]
    fn test_decode_reports_url() {
        let err = decode::<Team>("http://localhost:8000/api/teams/1/", "{}").unwrap_err();
        assert!(matches!(err, PredictorError::Decode { ref url, .. } if url.ends_with("/teams/1/")));
    }

    #[test]
    fn test_requests_declare_json_content_type() {
        let client = reqwest::Client::new();
        let get = request(&client, Method::GET, "http://localhost:8000/api/teams/")
            .build()
            .unwrap();
        assert_eq!(get.headers()[CONTENT_TYPE], "application/json");

        let post = request(&client, Method::POST, "http://localhost:8000/api/predict/")
            .json(&serde_json::json!({"team_id": 1}))
            .build()
            .unwrap();
        assert_eq!(post.headers().get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(post.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_decode_empty_body_as_unrecognized_list() {
        let teams: ListResponse<Team> = decode("http://localhost:8000/api/teams/", "").unwrap();
        assert!(!teams.is_recognized());
    }
}
