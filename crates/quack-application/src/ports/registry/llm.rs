//! LLM Provider Registry
//!
//! Auto-registration system for LLM providers using linkme distributed slices.
//! Providers register themselves via `#[linkme::distributed_slice]` and are
//! discovered at runtime. [`LlmProviderRegistry`] seeds a mutable table from
//! the slice so hosts can add or replace constructors at runtime.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use quack_domain::error::{Error, Result};
use quack_domain::ports::LlmClient;
use tracing::debug;

/// Configuration for LLM provider creation
///
/// Contains all configuration options that an LLM provider might need.
/// Providers should use what they need and ignore the rest; unknown keys in
/// `extra` are passed through untouched.
#[derive(Debug, Clone, Default)]
pub struct LlmProviderConfig {
    /// Provider name (e.g., "openai", "anthropic", "mock")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// API key for authentication
    pub api_key: Option<String>,
    /// Base URL for the provider API
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Canned responses returned in call order (mock provider)
    pub script: Vec<String>,
    /// Canned token counts returned in call order (mock provider)
    pub token_counts: Vec<u32>,
    /// Retries after a transient request failure (HTTP providers)
    pub retry_count: Option<u32>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl LlmProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the scripted responses
    pub fn with_script<I, S>(mut self, script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script = script.into_iter().map(Into::into).collect();
        self
    }

    /// Set the scripted token counts
    pub fn with_token_counts(mut self, token_counts: impl IntoIterator<Item = u32>) -> Self {
        self.token_counts = token_counts.into_iter().collect();
        self
    }

    /// Set the retry count for transient request failures
    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = Some(retry_count);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for LLM providers
///
/// Each LLM provider implementation registers itself with this entry
/// using `#[linkme::distributed_slice(LLM_PROVIDERS)]`. The entry contains
/// metadata and a factory function to create client instances.
pub struct LlmProviderEntry {
    /// Unique provider name, lowercase (e.g., "openai", "mock")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a client instance
    pub factory: fn(&LlmProviderConfig) -> Result<Arc<dyn LlmClient>>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static LLM_PROVIDERS: [LlmProviderEntry] = [..];

/// Runtime constructor stored in an [`LlmProviderRegistry`]
pub type LlmProviderConstructor =
    Arc<dyn Fn(&LlmProviderConfig) -> Result<Arc<dyn LlmClient>> + Send + Sync>;

/// Mutable provider table keyed by lowercase provider name
///
/// Registering an existing name replaces the previous constructor. Lookups
/// are case-insensitive.
#[derive(Clone, Default)]
pub struct LlmProviderRegistry {
    constructors: HashMap<String, LlmProviderConstructor>,
}

impl LlmProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with every provider in [`LLM_PROVIDERS`]
    pub fn from_catalog() -> Self {
        let mut registry = Self::new();
        for entry in LLM_PROVIDERS {
            registry.register(entry.name, entry.factory);
        }
        registry
    }

    /// Register or replace the constructor for `name`
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(&LlmProviderConfig) -> Result<Arc<dyn LlmClient>> + Send + Sync + 'static,
    {
        let key = name.to_lowercase();
        if self
            .constructors
            .insert(key.clone(), Arc::new(constructor))
            .is_some()
        {
            debug!(provider = %key, "Replaced LLM provider constructor");
        } else {
            debug!(provider = %key, "Registered LLM provider");
        }
    }

    /// Remove the constructor for `name`, returning whether it existed
    pub fn unregister(&mut self, name: &str) -> bool {
        self.constructors.remove(&name.to_lowercase()).is_some()
    }

    /// Whether a constructor is registered for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&name.to_lowercase())
    }

    /// Registered provider names, sorted
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Construct a client for `config.provider`
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedProvider`] when no constructor matches; the
    ///   error lists the registered names.
    /// * [`Error::ProviderConstruction`] when the constructor fails.
    pub fn resolve(&self, config: &LlmProviderConfig) -> Result<Arc<dyn LlmClient>> {
        let key = config.provider.to_lowercase();
        let Some(constructor) = self.constructors.get(&key) else {
            return Err(Error::unsupported_provider(
                &config.provider,
                self.provider_names(),
            ));
        };

        let client = constructor(config).map_err(|e| wrap_construction_error(&key, e))?;
        debug!(provider = %key, model = %client.model(), "Created LLM client");
        Ok(client)
    }
}

impl fmt::Debug for LlmProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmProviderRegistry")
            .field("providers", &self.provider_names())
            .finish()
    }
}

// An unsupported-provider error from a nested lookup must stay recognizable.
fn wrap_construction_error(provider: &str, error: Error) -> Error {
    match error {
        e @ Error::UnsupportedProvider { .. } => e,
        other => Error::provider_construction(provider, other),
    }
}

/// Resolve LLM provider by name from the static registry
///
/// Equivalent to `LlmProviderRegistry::from_catalog().resolve(config)`:
/// only providers declared in [`LLM_PROVIDERS`] are visible. Constructors
/// added through [`LlmProviderRegistry::register`] live in that registry
/// instance and are not seen here.
///
/// # Example
///
/// ```ignore
/// let config = LlmProviderConfig::new("mock")
///     .with_script(["hello", "world"]);
/// let client = resolve_llm_provider(&config)?;
/// ```
pub fn resolve_llm_provider(config: &LlmProviderConfig) -> Result<Arc<dyn LlmClient>> {
    LlmProviderRegistry::from_catalog().resolve(config)
}

/// List all registered LLM providers
///
/// Returns a list of (name, description) tuples for all registered
/// LLM providers. Useful for CLI help.
pub fn list_llm_providers() -> Vec<(&'static str, &'static str)> {
    LLM_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
