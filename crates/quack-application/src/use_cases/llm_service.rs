//! LLM Service Use Case
//!
//! The LLM facade is itself an integration: it is registered under the name
//! `LLM`, resolves its client through the [`LlmProviderRegistry`] during
//! `initialize()` and forwards chat and token counting to that client.

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use quack_domain::constants::{LLM_INTEGRATION_NAME, LLM_INTEGRATION_VERSION};
use quack_domain::error::{Error, Result};
use quack_domain::ports::{Integration, LlmClient};
use quack_domain::value_objects::{ChatMessage, ChatResponse, LlmConfig, LlmOptions};
use tracing::{debug, info, warn};

use crate::ports::registry::{LlmProviderConfig, LlmProviderRegistry};

/// LLM service integration
///
/// Explicit overrides (provider, model, API key) win over configuration;
/// without configuration the defaults of [`LlmConfig`] apply. Until
/// `initialize()` succeeds every request fails with
/// [`Error::NotInitialized`].
pub struct LlmIntegration {
    provider: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    script: Vec<String>,
    token_counts: Vec<u32>,
    config: Option<LlmConfig>,
    providers: LlmProviderRegistry,
    client: RwLock<Option<Arc<dyn LlmClient>>>,
}

impl LlmIntegration {
    /// Facade over every provider in the compile-time catalog
    pub fn new() -> Self {
        Self::with_provider_registry(LlmProviderRegistry::from_catalog())
    }

    /// Facade over an explicit provider registry
    pub fn with_provider_registry(providers: LlmProviderRegistry) -> Self {
        Self {
            provider: None,
            model: None,
            api_key: None,
            script: Vec::new(),
            token_counts: Vec::new(),
            config: None,
            providers,
            client: RwLock::new(None),
        }
    }

    /// Override the configured provider
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Override the configured model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the configured API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Canned responses handed to the provider (used by `mock`)
    pub fn with_script<I, S>(mut self, script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script = script.into_iter().map(Into::into).collect();
        self
    }

    /// Canned token counts handed to the provider (used by `mock`)
    pub fn with_token_counts(mut self, token_counts: impl IntoIterator<Item = u32>) -> Self {
        self.token_counts = token_counts.into_iter().collect();
        self
    }

    /// Use `config` instead of the defaults
    pub fn with_config(mut self, config: LlmConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provider the facade will resolve (override, else configured default)
    pub fn provider(&self) -> String {
        match &self.provider {
            Some(provider) => provider.clone(),
            None => self.effective_config().default_provider,
        }
    }

    /// Option bundle `initialize()` passes to the provider registry
    pub fn provider_config(&self) -> LlmProviderConfig {
        let config = self.effective_config();
        let provider = self.provider();
        let settings = config.provider_settings(&provider).cloned().unwrap_or_default();

        let mut options = LlmProviderConfig::new(&provider)
            .with_timeout(Duration::from_secs(config.timeout_secs))
            .with_script(self.script.iter().cloned())
            .with_token_counts(self.token_counts.iter().copied())
            .with_retry_count(config.retry_count);
        options.model = self.model.clone().or(settings.model);
        options.api_key = self.api_key.clone().or(settings.api_key);
        options.base_url = settings.base_url;
        options
    }

    /// The resolved client
    ///
    /// # Errors
    ///
    /// [`Error::NotInitialized`] before a successful `initialize()`.
    pub fn client(&self) -> Result<Arc<dyn LlmClient>> {
        self.client
            .read()
            .map_err(|_| Error::internal("LLM client lock poisoned"))?
            .clone()
            .ok_or_else(|| Error::not_initialized("LLM client"))
    }

    /// Send a conversation through the resolved client
    pub async fn chat(&self, messages: &[ChatMessage], options: &LlmOptions) -> Result<ChatResponse> {
        let client = self.client()?;
        client.chat(messages, options).await
    }

    /// Count tokens through the resolved client
    pub async fn count_tokens(&self, messages: &[ChatMessage]) -> Result<u32> {
        let client = self.client()?;
        client.count_tokens(messages).await
    }

    fn effective_config(&self) -> LlmConfig {
        self.config.clone().unwrap_or_default()
    }
}

impl Default for LlmIntegration {
    fn default() -> Self {
        Self::new()
    }
}

impl Integration for LlmIntegration {
    fn name(&self) -> &str {
        LLM_INTEGRATION_NAME
    }

    fn version(&self) -> &str {
        LLM_INTEGRATION_VERSION
    }

    fn initialize(&self) -> Result<()> {
        let options = self.provider_config();
        debug!(provider = %options.provider, "Initializing LLM integration");

        let resolved = self.providers.resolve(&options);
        let mut slot = self
            .client
            .write()
            .map_err(|_| Error::internal("LLM client lock poisoned"))?;

        match resolved {
            Ok(client) => {
                info!(
                    provider = %client.provider_name(),
                    model = %client.model(),
                    "LLM integration initialized"
                );
                *slot = Some(client);
                Ok(())
            }
            Err(e) => {
                // A failed re-initialization drops the previous client too
                *slot = None;
                warn!(provider = %options.provider, error = %e, "LLM integration failed to initialize");
                Err(e)
            }
        }
    }

    fn is_available(&self) -> bool {
        self.client.read().map(|c| c.is_some()).unwrap_or(false)
    }
}

impl fmt::Debug for LlmIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmIntegration")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("initialized", &self.is_available())
            .finish_non_exhaustive()
    }
}
