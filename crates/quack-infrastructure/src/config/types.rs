//! Configuration sections

use std::path::PathBuf;

use quack_domain::value_objects::LlmConfig;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DISCOVER_ON_STARTUP, DEFAULT_LOG_LEVEL, LOG_MAX_FILES, LOG_ROTATION_SIZE,
};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// LLM service configuration
    pub llm: LlmConfig,
    /// Integration discovery at startup
    pub integrations: IntegrationsConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to file in addition to stdout
    pub file_output: Option<PathBuf>,

    /// Maximum file size before rotation (bytes)
    pub max_file_size: u64,

    /// Maximum number of rotated files to keep
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
            max_file_size: LOG_ROTATION_SIZE,
            max_files: LOG_MAX_FILES,
        }
    }
}

/// Which integrations are set up when the application starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Run entry point discovery
    pub discover_on_startup: bool,
    /// Module paths loaded after discovery, in order
    pub modules: Vec<String>,
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            discover_on_startup: DEFAULT_DISCOVER_ON_STARTUP,
            modules: Vec::new(),
        }
    }
}
