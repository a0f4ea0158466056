//! OpenAI LLM Provider
//!
//! Implements the LlmClient port using OpenAI's chat completions API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use quack_application::ports::registry::{LLM_PROVIDERS, LlmProviderConfig, LlmProviderEntry};
use quack_domain::constants::OPENAI_PROVIDER_NAME;
use quack_domain::error::{Error, Result};
use quack_domain::ports::LlmClient;
use quack_domain::value_objects::{ChatMessage, ChatResponse, LlmOptions};

use crate::constants::{
    CONTENT_TYPE_JSON, OPENAI_API_KEY_ENV, OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL,
};
use crate::llm::helpers::{constructor, estimate_tokens};
use crate::utils::HttpResponseUtils;

/// OpenAI chat client
///
/// Receives HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use quack_providers::llm::OpenAiLlmClient;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(60))
///         .build()?;
///     let llm = OpenAiLlmClient::new(
///         "sk-your-api-key".to_string(),
///         None,
///         "gpt-4o".to_string(),
///         Duration::from_secs(60),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OpenAiLlmClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    retry_count: u32,
    http_client: Client,
}

impl OpenAiLlmClient {
    /// Create a new OpenAI client
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Default model (e.g., "gpt-4o")
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
            base_url: constructor::effective_url(base_url.as_deref(), OPENAI_DEFAULT_BASE_URL),
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

    fn build_payload(&self, messages: &[ChatMessage], options: &LlmOptions) -> Value {
        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": m.content }))
            .collect();

        let mut payload = json!({
            "model": options.model.as_deref().unwrap_or(&self.model),
            "messages": messages,
        });
        if let Some(temperature) = options.temperature {
            payload["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = options.max_tokens {
            payload["max_tokens"] = json!(max_tokens);
        }
        if !options.stop.is_empty() {
            payload["stop"] = json!(options.stop);
        }
        payload
    }

    async fn post(&self, payload: &Value) -> Result<Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let build = || {
            self.http_client
                .post(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", CONTENT_TYPE_JSON)
                .timeout(self.timeout)
                .json(payload)
        };

        HttpResponseUtils::send_with_retry(build, "OpenAI", self.timeout, self.retry_count).await
    }
}

#[async_trait]
impl LlmClient for OpenAiLlmClient {
    async fn chat(&self, messages: &[ChatMessage], options: &LlmOptions) -> Result<ChatResponse> {
        let payload = self.build_payload(messages, options);
        let data = self.post(&payload).await?;

        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                Error::provider(
                    OPENAI_PROVIDER_NAME,
                    "Invalid response format: missing choices[0].message.content",
                )
            })?
            .to_string();
        let model = data["model"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| self.model.clone());

        Ok(ChatResponse {
            content,
            model,
            provider: OPENAI_PROVIDER_NAME.to_string(),
        })
    }

    async fn count_tokens(&self, messages: &[ChatMessage]) -> Result<u32> {
        // No counting endpoint; estimate locally.
        Ok(estimate_tokens(messages))
    }

    fn provider_name(&self) -> &str {
        OPENAI_PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(LLM_PROVIDERS)]
static OPENAI_PROVIDER: LlmProviderEntry = LlmProviderEntry {
    name: OPENAI_PROVIDER_NAME,
    description: "OpenAI chat completions (gpt-4o, gpt-4o-mini, ...)",
    factory: openai_factory,
};

fn openai_factory(config: &LlmProviderConfig) -> Result<Arc<dyn LlmClient>> {
    let api_key = constructor::resolve_api_key(config, "OpenAI", OPENAI_API_KEY_ENV)?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string());
    let timeout = constructor::timeout(config);
    let http_client = constructor::http_client(timeout)?;
    let retry_count = constructor::retry_count(config);

    Ok(Arc::new(OpenAiLlmClient::new(
        api_key,
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    )
    .with_retry_count(retry_count)))
}
