//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`LoadedObject`] | Untrusted result of a foreign loading mechanism |
//! | [`EntryPoint`] | Declared, resolvable reference to an integration constructor |
//! | [`ChatMessage`] | One message of an LLM conversation |
//! | [`LlmOptions`] | Per-request generation options |
//! | [`ChatResponse`] | Assistant reply returned by an LLM client |
//! | [`LlmConfig`] | LLM service configuration section |

/// Configuration value objects
pub mod config;
/// LLM conversation value objects
pub mod llm;
/// Plugin loading value objects
pub mod plugin;

pub use config::{LlmConfig, LlmProviderSettings};
pub use llm::{ChatMessage, ChatResponse, LlmOptions, Role};
pub use plugin::{EntryPoint, EntryPointLoader, IntegrationFactory, LoadedObject};
