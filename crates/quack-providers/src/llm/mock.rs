//! Mock LLM client for testing and development
//!
//! Replays canned responses and token counts in call order. No network,
//! no API key, fully deterministic.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use quack_application::ports::registry::{LLM_PROVIDERS, LlmProviderConfig, LlmProviderEntry};
use quack_domain::constants::MOCK_PROVIDER_NAME;
use quack_domain::error::Result;
use quack_domain::ports::LlmClient;
use quack_domain::value_objects::{ChatMessage, ChatResponse, LlmOptions};

use crate::constants::{MOCK_DEFAULT_MODEL, MOCK_DEFAULT_RESPONSE};

/// Scripted LLM client
///
/// The n-th `chat` call returns the n-th scripted response and the n-th
/// `count_tokens` call the n-th scripted count. Once a list is exhausted its
/// last element repeats. Without a script every reply is
/// [`MOCK_DEFAULT_RESPONSE`]; without token counts the whitespace-separated
/// words of the conversation are counted.
///
/// # Example
///
/// ```
/// use quack_domain::ports::LlmClient;
/// use quack_providers::llm::MockLlmClient;
///
/// let client = MockLlmClient::new(vec!["hi".to_string()], vec![3]);
/// assert_eq!(client.provider_name(), "mock");
/// assert_eq!(client.script(), ["hi".to_string()]);
/// ```
#[derive(Debug)]
pub struct MockLlmClient {
    model: String,
    script: Vec<String>,
    token_counts: Vec<u32>,
    chat_calls: AtomicUsize,
    count_calls: AtomicUsize,
}

impl MockLlmClient {
    /// Create a mock client with a script and token counts
    pub fn new(script: Vec<String>, token_counts: Vec<u32>) -> Self {
        Self {
            model: MOCK_DEFAULT_MODEL.to_string(),
            script,
            token_counts,
            chat_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock client from provider options
    pub fn from_config(config: &LlmProviderConfig) -> Self {
        let client = Self::new(config.script.clone(), config.token_counts.clone());
        match &config.model {
            Some(model) => client.with_model(model),
            None => client,
        }
    }

    /// Report `model` as the client's model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Scripted responses
    pub fn script(&self) -> &[String] {
        &self.script
    }

    /// Number of `chat` calls served so far
    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

// Take the element for this call, repeating the last one when exhausted.
fn next_scripted<T: Clone>(items: &[T], calls: &AtomicUsize) -> Option<T> {
    let index = calls.fetch_add(1, Ordering::SeqCst);
    items.get(index).or_else(|| items.last()).cloned()
}

fn word_count(messages: &[ChatMessage]) -> u32 {
    messages
        .iter()
        .map(|m| m.content.split_whitespace().count() as u32)
        .sum()
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn chat(&self, _messages: &[ChatMessage], options: &LlmOptions) -> Result<ChatResponse> {
        let content = next_scripted(&self.script, &self.chat_calls)
            .unwrap_or_else(|| MOCK_DEFAULT_RESPONSE.to_string());

        Ok(ChatResponse {
            content,
            model: options.model.clone().unwrap_or_else(|| self.model.clone()),
            provider: MOCK_PROVIDER_NAME.to_string(),
        })
    }

    async fn count_tokens(&self, messages: &[ChatMessage]) -> Result<u32> {
        Ok(next_scripted(&self.token_counts, &self.count_calls)
            .unwrap_or_else(|| word_count(messages)))
    }

    fn provider_name(&self) -> &str {
        MOCK_PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(LLM_PROVIDERS)]
static MOCK_PROVIDER: LlmProviderEntry = LlmProviderEntry {
    name: MOCK_PROVIDER_NAME,
    description: "Deterministic scripted client for tests (script, token_counts)",
    factory: mock_factory,
};

fn mock_factory(config: &LlmProviderConfig) -> Result<Arc<dyn LlmClient>> {
    Ok(Arc::new(MockLlmClient::from_config(config)))
}
