//! LLM Provider Implementations
//!
//! Each client implements the `LlmClient` port and registers a factory in
//! the `LLM_PROVIDERS` slice.
//!
//! | Provider | Client | Network |
//! |----------|--------|---------|
//! | `mock` | [`MockLlmClient`] | none |
//! | `openai` | [`OpenAiLlmClient`] | chat completions API |
//! | `anthropic` | [`AnthropicLlmClient`] | messages API |

pub mod helpers;
pub mod mock;

#[cfg(feature = "llm-anthropic")]
pub mod anthropic;
#[cfg(feature = "llm-openai")]
pub mod openai;

#[cfg(feature = "llm-anthropic")]
pub use anthropic::AnthropicLlmClient;
pub use mock::MockLlmClient;
#[cfg(feature = "llm-openai")]
pub use openai::OpenAiLlmClient;
