//! Common helpers for LLM providers
//!
//! Shared constructor logic for the HTTP-backed clients.

use std::time::Duration;

use quack_application::ports::registry::LlmProviderConfig;
use quack_domain::constants::DEFAULT_LLM_RETRY_COUNT;
use quack_domain::error::{Error, Result};
use quack_domain::value_objects::ChatMessage;
use reqwest::Client;
use tracing::debug;

use crate::constants::{CHARS_PER_TOKEN_ESTIMATE, DEFAULT_LLM_REQUEST_TIMEOUT};

/// Common constructor patterns used by LLM providers
pub mod constructor {
    use super::*;

    /// API key from the config, else from `env_var`
    ///
    /// # Errors
    ///
    /// [`Error::Authentication`] when neither is set.
    pub fn resolve_api_key(config: &LlmProviderConfig, provider: &str, env_var: &str) -> Result<String> {
        let configured = config.api_key.as_deref().map(str::trim);
        if let Some(key) = configured.filter(|key| !key.is_empty()) {
            return Ok(key.to_string());
        }

        match std::env::var(env_var) {
            Ok(key) if !key.trim().is_empty() => {
                debug!(provider = %provider, env_var = %env_var, "Using API key from environment");
                Ok(key.trim().to_string())
            }
            _ => Err(Error::authentication(format!(
                "{provider} requires an API key (set api_key or {env_var})"
            ))),
        }
    }

    /// Get effective URL with fallback to default, without a trailing slash
    pub fn effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| default_url.to_string())
    }

    /// Timeout from the config or the provider default
    pub fn timeout(config: &LlmProviderConfig) -> Duration {
        config.timeout.unwrap_or(DEFAULT_LLM_REQUEST_TIMEOUT)
    }

    /// Retry count from the config or the default
    pub fn retry_count(config: &LlmProviderConfig) -> u32 {
        config.retry_count.unwrap_or(DEFAULT_LLM_RETRY_COUNT)
    }

    /// Build the shared HTTP client
    pub fn http_client(timeout: Duration) -> Result<Client> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::network_with_source("Failed to create HTTP client", e))
    }
}

/// Local token estimate for providers without a counting endpoint
pub fn estimate_tokens(messages: &[ChatMessage]) -> u32 {
    let chars: usize = messages.iter().map(|m| m.content.chars().count()).sum();
    chars.div_ceil(CHARS_PER_TOKEN_ESTIMATE) as u32
}
