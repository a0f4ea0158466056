//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML or YAML files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use quack_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. Configuration file (explicit path, else the first default location found)
    /// 3. Environment variables with prefix (e.g., `QUACK__LLM__DEFAULT_PROVIDER`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(path) if path.exists() => {
                figment = merge_file(figment, path);
                log_config_loaded(path, true);
            }
            Some(path) => log_config_loaded(path, false),
            None => {
                if let Some(path) = Self::find_default_config_path() {
                    figment = merge_file(figment, &path);
                    log_config_loaded(&path, true);
                }
            }
        }

        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        figment = figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR));

        let config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file as TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    ///
    /// Looks in `./quack.toml`, `./quack/quack.toml`, the platform config
    /// directory and `~/.quack/quack.toml`, in that order.
    pub fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    if is_yaml(path) {
        figment.merge(Yaml::file(path))
    } else {
        figment.merge(Toml::file(path))
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            YAML_EXTENSIONS
                .iter()
                .any(|yaml| ext.eq_ignore_ascii_case(yaml))
        })
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    validate_llm_config(config)?;
    validate_integrations_config(config)?;
    Ok(())
}

fn validate_llm_config(config: &AppConfig) -> Result<()> {
    if config.llm.default_provider.trim().is_empty() {
        return Err(Error::config("LLM default provider cannot be empty"));
    }
    if config.llm.timeout_secs == 0 {
        return Err(Error::config("LLM timeout cannot be 0"));
    }
    Ok(())
}

fn validate_integrations_config(config: &AppConfig) -> Result<()> {
    if config
        .integrations
        .modules
        .iter()
        .any(|module| module.trim().is_empty())
    {
        return Err(Error::config("Integration module paths cannot be empty"));
    }
    Ok(())
}
