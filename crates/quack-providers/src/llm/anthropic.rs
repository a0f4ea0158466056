//! Anthropic LLM Provider
//!
//! Implements the LlmClient port using Anthropic's messages API. Token
//! counting uses the dedicated `messages/count_tokens` endpoint.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use quack_application::ports::registry::{LLM_PROVIDERS, LlmProviderConfig, LlmProviderEntry};
use quack_domain::constants::ANTHROPIC_PROVIDER_NAME;
use quack_domain::error::{Error, Result};
use quack_domain::ports::LlmClient;
use quack_domain::value_objects::{ChatMessage, ChatResponse, LlmOptions, Role};

use crate::constants::{
    ANTHROPIC_API_KEY_ENV, ANTHROPIC_API_VERSION, ANTHROPIC_DEFAULT_BASE_URL,
    ANTHROPIC_DEFAULT_MAX_TOKENS, ANTHROPIC_DEFAULT_MODEL, CONTENT_TYPE_JSON,
};
use crate::llm::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Anthropic messages client
pub struct AnthropicLlmClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    retry_count: u32,
    http_client: Client,
}

impl AnthropicLlmClient {
    /// Create a new Anthropic client
    ///
    /// # Arguments
    /// * `api_key` - Anthropic API key
    /// * `base_url` - Optional custom base URL (defaults to Anthropic API)
    /// * `model` - Default model (e.g., "claude-3-opus-20240229")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            base_url: constructor::effective_url(base_url.as_deref(), ANTHROPIC_DEFAULT_BASE_URL),
            model,
            timeout,
            retry_count: 0,
            http_client,
        }
    }

    /// Retry transient request failures up to `retry_count` times
    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Retries applied to transient request failures
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Get the base URL for this client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // System prompts travel in a top-level field, not in the message list.
    fn split_messages(messages: &[ChatMessage]) -> (Option<String>, Vec<Value>) {
        let system: Vec<&str> = messages
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect();
        let turns = messages
            .iter()
            .filter(|m| m.role != Role::System)
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        let system = (!system.is_empty()).then(|| system.join("\n\n"));
        (system, turns)
    }

    fn build_payload(&self, messages: &[ChatMessage], options: &LlmOptions) -> Value {
        let (system, turns) = Self::split_messages(messages);
        let mut payload = json!({
            "model": options.model.as_deref().unwrap_or(&self.model),
            "messages": turns,
            "max_tokens": options.max_tokens.unwrap_or(ANTHROPIC_DEFAULT_MAX_TOKENS),
        });
        if let Some(system) = system {
            payload["system"] = json!(system);
        }
        if let Some(temperature) = options.temperature {
            payload["temperature"] = json!(temperature);
        }
        if !options.stop.is_empty() {
            payload["stop_sequences"] = json!(options.stop);
        }
        payload
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        let url = format!("{}/{path}", self.base_url);
        let build = || {
            self.http_client
                .post(&url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_API_VERSION)
                .header("Content-Type", CONTENT_TYPE_JSON)
                .timeout(self.timeout)
                .json(payload)
        };

        HttpResponseUtils::send_with_retry(build, "Anthropic", self.timeout, self.retry_count).await
    }
}

#[async_trait]
impl LlmClient for AnthropicLlmClient {
    async fn chat(&self, messages: &[ChatMessage], options: &LlmOptions) -> Result<ChatResponse> {
        let payload = self.build_payload(messages, options);
        let data = self.post("messages", &payload).await?;

        let content: String = data["content"]
            .as_array()
            .ok_or_else(|| {
                Error::provider(
                    ANTHROPIC_PROVIDER_NAME,
                    "Invalid response format: missing content array",
                )
            })?
            .iter()
            .filter(|block| block["type"] == "text")
            .filter_map(|block| block["text"].as_str())
            .collect();
        let model = data["model"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| self.model.clone());

        Ok(ChatResponse {
            content,
            model,
            provider: ANTHROPIC_PROVIDER_NAME.to_string(),
        })
    }

    async fn count_tokens(&self, messages: &[ChatMessage]) -> Result<u32> {
        let (system, turns) = Self::split_messages(messages);
        let mut payload = json!({ "model": self.model, "messages": turns });
        if let Some(system) = system {
            payload["system"] = json!(system);
        }

        let data = self.post("messages/count_tokens", &payload).await?;
        data["input_tokens"]
            .as_u64()
            .map(|n| n as u32)
            .ok_or_else(|| {
                Error::provider(
                    ANTHROPIC_PROVIDER_NAME,
                    "Invalid response format: missing input_tokens",
                )
            })
    }

    fn provider_name(&self) -> &str {
        ANTHROPIC_PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(LLM_PROVIDERS)]
static ANTHROPIC_PROVIDER: LlmProviderEntry = LlmProviderEntry {
    name: ANTHROPIC_PROVIDER_NAME,
    description: "Anthropic messages API (claude-3 family)",
    factory: anthropic_factory,
};

fn anthropic_factory(config: &LlmProviderConfig) -> Result<Arc<dyn LlmClient>> {
    let api_key = constructor::resolve_api_key(config, "Anthropic", ANTHROPIC_API_KEY_ENV)?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| ANTHROPIC_DEFAULT_MODEL.to_string());
    let timeout = constructor::timeout(config);
    let http_client = constructor::http_client(timeout)?;
    let retry_count = constructor::retry_count(config);

    Ok(Arc::new(AnthropicLlmClient::new(
        api_key,
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    )
    .with_retry_count(retry_count)))
}
