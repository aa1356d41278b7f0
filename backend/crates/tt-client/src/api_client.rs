use crate::{ClientError, ClientResult};

use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tt_config::ApiConfig;

const MAX_ERROR_MESSAGE_LENGTH: usize = 200;

/// Unauthenticated HTTP client for the TaxTrack API.
///
/// Sends JSON and joins request paths onto the configured base URL. Used
/// directly only for login; everything else goes through
/// [`AuthenticatedClient`](crate::AuthenticatedClient).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a client without a request timeout.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://api.example.com" or "http://127.0.0.1:8000/v1")
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::build(base_url, None)
    }

    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::build(&config.base_url, config.timeout())
    }

    fn build(base_url: &str, timeout: Option<std::time::Duration>) -> ClientResult<Self> {
        let trimmed = base_url.trim();
        let base_url =
            Url::parse(trimmed).map_err(|e| ClientError::invalid_url(trimmed, e.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::invalid_url(
                trimmed,
                "URL cannot be used as a base",
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = ReqwestClient::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    ///
    /// A trailing empty segment produces a trailing slash.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(self.base_url.as_str(), "URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> ClientResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!("{method} {}", url.path());
        Ok(self.client.request(method, url))
    }

    /// Execute request and map non-success statuses to [`ClientError::Api`].
    ///
    /// An empty success body decodes as JSON `null`.
    pub(crate) async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(String::from))
                .unwrap_or_else(|| String::from("Unknown error"));
            debug!("Request failed with {status}: {message}");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if body.trim().is_empty() {
            return Ok(serde_json::from_str("null")?);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"detail": ..}`, `{"message": ..}`, `{"error": ..}` (string
/// or `{"message": ..}`) and `{"non_field_errors": [..]}`; otherwise falls
/// back to the raw body, truncated.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<Value>(body) {
        let found = json
            .get("detail")
            .or_else(|| json.get("message"))
            .and_then(Value::as_str)
            .or_else(|| match json.get("error") {
                Some(Value::String(message)) => Some(message.as_str()),
                Some(error) => error.get("message").and_then(Value::as_str),
                None => None,
            })
            .or_else(|| {
                json.get("non_field_errors")
                    .and_then(|errors| errors.get(0))
                    .and_then(Value::as_str)
            });

        if let Some(message) = found {
            return Some(message.to_string());
        }
    }

    Some(body.chars().take(MAX_ERROR_MESSAGE_LENGTH).collect())
}
