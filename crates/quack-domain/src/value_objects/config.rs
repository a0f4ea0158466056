//! Configuration value objects shared between the facade and the loader

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ANTHROPIC_PROVIDER_NAME, DEFAULT_LLM_PROVIDER, DEFAULT_LLM_RETRY_COUNT,
    DEFAULT_LLM_TIMEOUT_SECS, OPENAI_PROVIDER_NAME,
};

/// Settings for one LLM provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmProviderSettings {
    /// Model used when the caller does not override it
    pub model: Option<String>,
    /// API key (falls back to the provider's environment variable)
    pub api_key: Option<String>,
    /// Custom API base URL
    pub base_url: Option<String>,
}

impl LlmProviderSettings {
    /// Settings with only a default model
    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Default::default()
        }
    }
}

/// LLM service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider used when none is requested explicitly
    pub default_provider: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retry count handed to provider clients
    pub retry_count: u32,
    /// Per-provider settings keyed by provider name
    pub providers: BTreeMap<String, LlmProviderSettings>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        let mut providers = BTreeMap::new();
        providers.insert(
            OPENAI_PROVIDER_NAME.to_string(),
            LlmProviderSettings::with_model("gpt-4o"),
        );
        providers.insert(
            ANTHROPIC_PROVIDER_NAME.to_string(),
            LlmProviderSettings::with_model("claude-3-opus-20240229"),
        );

        Self {
            default_provider: DEFAULT_LLM_PROVIDER.to_string(),
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            retry_count: DEFAULT_LLM_RETRY_COUNT,
            providers,
        }
    }
}

impl LlmConfig {
    /// Settings for a provider, matched case-insensitively
    pub fn provider_settings(&self, provider: &str) -> Option<&LlmProviderSettings> {
        self.providers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(provider))
            .map(|(_, settings)| settings)
    }
}
