//! # Quack Integrations
//!
//! Pluggable integration discovery and LLM provider resolution.
//!
//! This crate is the public facade: it re-exports the layer crates and hosts
//! the `quack` command line interface.
//!
//! ## Example
//!
//! ```no_run
//! use quack::application::IntegrationRegistry;
//!
//! let mut registry = IntegrationRegistry::new();
//! let report = registry.discover();
//! for name in report.names() {
//!     println!("discovered {name}");
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Capability contract, chat types, domain errors
//! - `application` - Integration registry, discovery, provider registry, LLM facade
//! - `providers` - Built-in LLM clients and integration entry points
//! - `infrastructure` - Configuration, logging, startup wiring

// Force-link quack-providers to ensure linkme registrations are included
extern crate quack_providers;

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use quack_domain::*;
}

/// Application layer - registries and services
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use quack_application::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use quack_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use quack_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registries at the crate root
pub use application::{IntegrationRegistry, LlmIntegration, LlmProviderRegistry};
