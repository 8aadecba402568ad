// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote response backends speaking the OpenAI Chat Completions protocol.
//!
//! One implementation serves both providers: OpenAI and Grok (xAI) differ
//! only in base URL, default model and the environment variable holding
//! the key.

pub mod client;
pub mod redact;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use pawpal_config::model::BackendConfig;
use pawpal_core::{
    AdapterType, BackendRequest, HealthStatus, PawpalError, PluginAdapter, ResponseBackend,
    Speaker,
};
use tracing::{debug, info};

use crate::client::ChatClient;
use crate::types::{ChatCompletionRequest, ChatMessage};

/// Which hosted API a backend talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Grok,
}

impl Provider {
    pub fn name(self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Grok => "grok",
        }
    }

    pub fn default_base_url(self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1",
            Provider::Grok => "https://api.grok.x.ai/v1",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-3.5-turbo",
            Provider::Grok => "grok-1",
        }
    }

    /// Environment variables consulted, in order, when no key is configured.
    pub fn key_env_vars(self) -> &'static [&'static str] {
        match self {
            Provider::OpenAi => &["OPENAI_API_KEY"],
            Provider::Grok => &["GROK_API_KEY", "XAI_API_KEY"],
        }
    }
}

/// Resolves the API key: configured value first, then the provider's env vars.
pub fn resolve_api_key(
    provider: Provider,
    configured: &Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(key) = configured
        && !key.trim().is_empty()
    {
        return Some(key.trim().to_string());
    }
    provider
        .key_env_vars()
        .iter()
        .filter_map(|var| lookup(var))
        .map(|k| k.trim().to_string())
        .find(|k| !k.is_empty())
}

/// A remote backend for one provider.
///
/// A backend without a key stays constructible; every `complete` call then
/// fails so the response chain moves on.
pub struct OpenAiBackend {
    provider: Provider,
    enabled: bool,
    client: Option<ChatClient>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiBackend {
    pub fn openai(config: &BackendConfig) -> Result<Self, PawpalError> {
        Self::from_config(Provider::OpenAi, config)
    }

    pub fn grok(config: &BackendConfig) -> Result<Self, PawpalError> {
        Self::from_config(Provider::Grok, config)
    }

    pub fn from_config(provider: Provider, config: &BackendConfig) -> Result<Self, PawpalError> {
        let key = resolve_api_key(provider, &config.api_key, |var| std::env::var(var).ok());
        Self::with_key(provider, config, key)
    }

    /// Builds a backend with an explicit key instead of consulting the environment.
    pub fn with_key(
        provider: Provider,
        config: &BackendConfig,
        api_key: Option<String>,
    ) -> Result<Self, PawpalError> {
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(provider.default_base_url());
        let client = match api_key {
            Some(key) => Some(ChatClient::new(
                key,
                base_url,
                Duration::from_secs(config.timeout_secs),
            )?),
            None => None,
        };
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| provider.default_model().to_string());

        if config.enabled {
            info!(
                backend = provider.name(),
                model = %model,
                has_key = client.is_some(),
                "remote backend configured"
            );
        }

        Ok(Self {
            provider,
            enabled: config.enabled,
            client,
            model,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Builds the wire request: system prompt, prior turns, then the new message.
    ///
    /// System turns are not sent. Pet turns become `assistant` messages.
    pub fn to_chat_request(&self, request: &BackendRequest) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(ChatMessage::new("system", request.system_prompt.as_str()));
        for turn in &request.history {
            let role = match turn.from {
                Speaker::User => "user",
                Speaker::Pet => "assistant",
                Speaker::System => continue,
            };
            messages.push(ChatMessage::new(role, turn.text.as_str()));
        }
        messages.push(ChatMessage::new("user", request.message.as_str()));

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl PluginAdapter for OpenAiBackend {
    fn name(&self) -> &str {
        self.provider.name()
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Backend
    }

    async fn health_check(&self) -> Result<HealthStatus, PawpalError> {
        Ok(match (&self.client, self.enabled) {
            (_, false) => HealthStatus::Degraded("disabled".into()),
            (None, true) => HealthStatus::Unhealthy("no API key".into()),
            (Some(_), true) => HealthStatus::Healthy,
        })
    }

    async fn shutdown(&self) -> Result<(), PawpalError> {
        Ok(())
    }
}

#[async_trait]
impl ResponseBackend for OpenAiBackend {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn complete(&self, request: BackendRequest) -> Result<String, PawpalError> {
        let client = self.client.as_ref().ok_or_else(|| {
            PawpalError::backend(format!("{} API key not configured", self.provider.name()))
        })?;
        let chat_request = self.to_chat_request(&request);
        debug!(
            backend = self.provider.name(),
            messages = chat_request.messages.len(),
            "sending completion request"
        );
        client.complete(&chat_request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawpal_core::ConversationTurn;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn enabled_config(base_url: Option<String>) -> BackendConfig {
        BackendConfig {
            enabled: true,
            base_url,
            ..BackendConfig::default()
        }
    }

    fn request() -> BackendRequest {
        BackendRequest {
            system_prompt: "You are Rex".into(),
            history: vec![
                ConversationTurn::new(Speaker::Pet, "Woof!"),
                ConversationTurn::new(Speaker::System, "Rex was fed"),
                ConversationTurn::new(Speaker::User, "good boy"),
            ],
            message: "what is 2+2?".into(),
        }
    }

    #[test]
    fn configured_key_wins_over_env() {
        let key = resolve_api_key(Provider::OpenAi, &Some("sk-config".into()), |_| {
            Some("sk-env".into())
        });
        assert_eq!(key.as_deref(), Some("sk-config"));
    }

    #[test]
    fn grok_falls_back_through_env_vars() {
        let key = resolve_api_key(Provider::Grok, &None, |var| {
            (var == "XAI_API_KEY").then(|| "xai-key".to_string())
        });
        assert_eq!(key.as_deref(), Some("xai-key"));
        assert!(resolve_api_key(Provider::Grok, &Some("  ".into()), |_| None).is_none());
    }

    #[test]
    fn defaults_follow_provider() {
        let backend = OpenAiBackend::with_key(Provider::Grok, &BackendConfig::default(), None)
            .unwrap();
        assert_eq!(backend.model(), "grok-1");
        assert_eq!(backend.name(), "grok");
        assert!(!backend.is_enabled());
    }

    #[test]
    fn chat_request_maps_roles_and_skips_system_turns() {
        let backend =
            OpenAiBackend::with_key(Provider::OpenAi, &enabled_config(None), Some("k".into()))
                .unwrap();
        let req = backend.to_chat_request(&request());
        let roles: Vec<_> = req.messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["system", "assistant", "user", "user"]);
        assert_eq!(req.messages[3].content.as_deref(), Some("what is 2+2?"));
        assert_eq!(req.model, "gpt-3.5-turbo");
        assert_eq!(req.max_tokens, 200);
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let backend =
            OpenAiBackend::with_key(Provider::OpenAi, &enabled_config(None), None).unwrap();
        let err = backend.complete(request()).await.unwrap_err();
        assert!(err.to_string().contains("API key not configured"));
        assert_eq!(
            backend.health_check().await.unwrap(),
            HealthStatus::Unhealthy("no API key".into())
        );
    }

    #[tokio::test]
    async fn complete_goes_to_configured_base_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "4! 🐾"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let config = enabled_config(Some(format!("{}/v1", server.uri())));
        let backend =
            OpenAiBackend::with_key(Provider::Grok, &config, Some("xai-test".into())).unwrap();
        assert_eq!(backend.complete(request()).await.unwrap(), "4! 🐾");
    }
}
