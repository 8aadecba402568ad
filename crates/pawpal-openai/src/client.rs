// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible Chat Completions endpoints.
//!
//! Handles Bearer authentication, the request timeout, and a single retry
//! on transient statuses (429, 500, 503).

use std::time::Duration;

use pawpal_core::PawpalError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::redact::redact;
use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl ChatClient {
    /// Builds a client posting to `{base_url}/chat/completions`.
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, PawpalError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|e| PawpalError::Config(format!("invalid API key header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| PawpalError::Backend {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key,
            max_retries: 1,
            retry_delay: Duration::from_secs(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Shortens the pause before the retry.
    #[cfg(test)]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Sends the request and returns the first choice's text, trimmed.
    ///
    /// An empty or missing completion is an error so callers fall through.
    pub async fn complete(&self, request: &ChatCompletionRequest) -> Result<String, PawpalError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying completion request after transient error");
                tokio::time::sleep(self.retry_delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .json(request)
                .send()
                .await
                .map_err(|e| PawpalError::Backend {
                    message: format!("HTTP request failed: {}", self.scrub(&e.to_string())),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, model = %request.model, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| PawpalError::Backend {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let parsed: ChatCompletionResponse =
                    serde_json::from_str(&body).map_err(|e| PawpalError::Backend {
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                let text = parsed.first_content().map(str::trim).unwrap_or_default();
                if text.is_empty() {
                    return Err(PawpalError::backend("API returned an empty completion"));
                }
                return Ok(text.to_string());
            }

            let body = self.scrub(&response.text().await.unwrap_or_default());

            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(PawpalError::backend(format!("API returned {status}: {body}")));
                continue;
            }

            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "API error ({}): {}",
                    api_err.error.type_.as_deref().unwrap_or("unknown"),
                    api_err.error.message
                ),
                Err(_) => format!("API returned {status}: {body}"),
            };
            warn!(status = %status, error = %message, "completion request failed");
            return Err(PawpalError::backend(message));
        }

        Err(last_error
            .unwrap_or_else(|| PawpalError::backend("completion request failed after retries")))
    }

    fn scrub(&self, text: &str) -> String {
        redact(text, &[self.api_key.as_str()])
    }
}

fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ChatClient {
        ChatClient::new("test-api-key".into(), base_url, Duration::from_secs(5))
            .unwrap()
            .with_retry_delay(Duration::from_millis(10))
    }

    fn test_request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![ChatMessage::new("user", "Hello")],
            max_tokens: 200,
            temperature: 0.7,
        }
    }

    fn reply(text: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": text}}]
        })
    }

    #[tokio::test]
    async fn complete_success_sends_bearer_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .and(body_partial_json(serde_json::json!({"model": "gpt-3.5-turbo", "max_tokens": 200})))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply("  Woof! 🐾  ")))
            .expect(1)
            .mount(&server)
            .await;

        let text = test_client(&server.uri()).complete(&test_request()).await.unwrap();
        assert_eq!(text, "Woof! 🐾");
    }

    #[tokio::test]
    async fn retries_once_on_429() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply("after retry")))
            .mount(&server)
            .await;

        let text = test_client(&server.uri()).complete(&test_request()).await.unwrap();
        assert_eq!(text, "after retry");
    }

    #[tokio::test]
    async fn gives_up_after_second_503() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(2)
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .complete(&test_request())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("503"), "got: {err}");
    }

    #[tokio::test]
    async fn auth_error_is_not_retried_and_key_is_redacted() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "error": {"type": "invalid_request_error", "message": "Incorrect API key provided: test-api-key"}
        });
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .complete(&test_request())
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("invalid_request_error"), "got: {err}");
        assert!(!err.contains("test-api-key"), "key leaked: {err}");
    }

    #[tokio::test]
    async fn empty_completion_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
            .mount(&server)
            .await;

        assert!(test_client(&server.uri()).complete(&test_request()).await.is_err());
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = ChatClient::new("k".into(), "https://api.openai.com/v1/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }
}
