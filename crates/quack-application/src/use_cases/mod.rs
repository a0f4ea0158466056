//! Use Cases
//!
//! Application services built on the registries.

/// LLM service facade
pub mod llm_service;

pub use llm_service::LlmIntegration;
