//! Application Layer - Quack Integrations
//!
//! This crate contains the application layer of Quack Integrations: the
//! integration registry, the provider registries and the LLM service
//! facade.
//!
//! ## Architecture
//!
//! The application layer:
//! - Discovers, validates and manages integrations
//! - Declares the linkme slices providers and modules register into
//! - Resolves LLM providers by name
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Ports (Interfaces)
//!
//! Defines contracts for external collaborators:
//! - `ports::registry::*`: Entry-point, module and LLM provider registries
//! - `ports::PluginLoader`: Optional host plugin loader
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `quack-domain`: For the capability contract, value objects and errors
//! - Pure Rust libraries for logging, serialization and registration

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
