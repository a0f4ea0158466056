//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `quack_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "quack.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "quack";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "QUACK";

/// Separator between the prefix and nested keys (`QUACK__LLM__TIMEOUT_SECS`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// File extensions read as YAML instead of TOML
pub const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_FILTER: &str = "QUACK_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log file name used when the configured path has no stem
pub const DEFAULT_LOG_FILE_STEM: &str = "quack";

/// Log rotation size in bytes (10MB)
pub const LOG_ROTATION_SIZE: u64 = 10 * 1024 * 1024;

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

// ============================================================================
// INTEGRATION CONSTANTS
// ============================================================================

/// Whether entry point discovery runs at startup by default
pub const DEFAULT_DISCOVER_ON_STARTUP: bool = true;
