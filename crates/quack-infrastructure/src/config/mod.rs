//! Application configuration
//!
//! [`AppConfig`] is assembled by [`ConfigLoader`] from defaults, an optional
//! TOML or YAML file and `QUACK__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, IntegrationsConfig, LoggingConfig};
