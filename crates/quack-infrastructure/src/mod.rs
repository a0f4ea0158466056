//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered configuration (defaults, file, `QUACK__` env) |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Startup wiring of the integration registry |
//! | [`error_ext`] | Context helpers converting foreign errors to domain errors |
//! | [`constants`] | Centralized infrastructure constants |

// Links the built-in providers so their linkme entries are registered
extern crate quack_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{IntegrationBootstrap, bootstrap_integrations};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
