use async_trait::async_trait;
use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::Result;
use crate::value_objects::{ChatMessage, ChatResponse, LlmOptions};

/// Language model client interface
///
/// Concrete clients are constructed by the LLM provider registry from a
/// named provider and an option bundle. Construction is synchronous and
/// never touches the network; requests happen in [`chat`](LlmClient::chat)
/// and [`count_tokens`](LlmClient::count_tokens).
///
/// # Example
///
/// ```ignore
/// use quack_domain::value_objects::{ChatMessage, LlmOptions};
///
/// let client = registry.resolve(&LlmProviderConfig::new("mock"))?;
/// let response = client
///     .chat(&[ChatMessage::user("hello")], &LlmOptions::default())
///     .await?;
/// println!("{}", response.content);
/// ```
#[async_trait]
pub trait LlmClient: DowncastSync {
    /// Send a conversation and return the assistant reply
    async fn chat(&self, messages: &[ChatMessage], options: &LlmOptions) -> Result<ChatResponse>;

    /// Count the tokens the conversation would consume
    async fn count_tokens(&self, messages: &[ChatMessage]) -> Result<u32>;

    /// Name of the provider that built this client (e.g., "openai", "mock")
    fn provider_name(&self) -> &str;

    /// Model the client sends requests to
    fn model(&self) -> &str;
}

impl_downcast!(sync LlmClient);
