//! # Quack Integrations - Provider Implementations
//!
//! This crate contains the user-selectable LLM providers and the built-in
//! integration declarations. Each provider implements the `LlmClient` port
//! defined in `quack-domain` and registers itself in the `LLM_PROVIDERS`
//! slice declared by `quack-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | LLM | `LlmClient` | Mock, OpenAI, Anthropic |
//! | Integration | `Integration` | LLM service facade (entry point `llm`) |
//!
//! ## Feature Flags
//!
//! The HTTP-backed providers can be disabled for minimal builds:
//!
//! ```toml
//! [dependencies]
//! quack-providers = { version = "0.1", default-features = false }
//! ```
//!
//! ## Usage
//!
//! Linking the crate is enough to register its providers:
//!
//! ```ignore
//! extern crate quack_providers;
//!
//! let client = resolve_llm_provider(&LlmProviderConfig::new("mock"))?;
//! ```

// Re-export quack-domain types commonly used with providers
pub use quack_domain::error::{Error, Result};
pub use quack_domain::ports::LlmClient;

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// LLM provider implementations
///
/// Implements `LlmClient` trait for the supported LLM backends.
pub mod llm;

/// Built-in integration entry points and modules
pub mod integrations;

pub use integrations::LLM_MODULE_PATH;
