//! Hugging Face inference API client

use async_trait::async_trait;
use docquery_application::ports::inference::{InferenceClient, InferenceError};
use docquery_domain::QueryPayload;
use serde_json::Value;
use tracing::debug;

/// Default base URL of the hosted inference API
pub const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models/";

/// How much of an error body to keep in messages
const MAX_ERROR_BODY: usize = 512;

/// [`InferenceClient`] adapter for the Hugging Face inference API.
///
/// One call posts the shaped payload to `{base_url}{endpoint}` with the
/// bearer token attached when one is configured. The client is cheap to
/// share and never mutated after construction.
pub struct HfInferenceClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HfInferenceClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl InferenceClient for HfInferenceClient {
    async fn call(&self, endpoint: &str, payload: &QueryPayload) -> Result<Value, InferenceError> {
        let url = self.url(endpoint);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(&payload.to_value());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        response
            .json()
            .await
            .map_err(|e| InferenceError::Decode(e.to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> InferenceError {
    if e.is_timeout() {
        InferenceError::Timeout
    } else {
        InferenceError::Transport(e.to_string())
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HfInferenceClient::with_base_url("https://example.test/models", None);
        assert_eq!(
            client.url("facebook/bart-large-cnn"),
            "https://example.test/models/facebook/bart-large-cnn"
        );
    }

    #[test]
    fn test_default_base_url_has_trailing_slash() {
        let client = HfInferenceClient::new(None);
        assert!(client.base_url.ends_with('/'));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let s = "aé".repeat(300);
        let out = truncate(&s, MAX_ERROR_BODY);
        assert!(out.len() <= MAX_ERROR_BODY + 3);
        assert!(out.ends_with("..."));
    }
}
