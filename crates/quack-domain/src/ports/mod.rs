//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the domain and external layers.
//! Integrations and LLM clients are implemented outside the domain (in
//! provider crates, plugins or host applications) and consumed through
//! these traits.
//!
//! ## Organization
//!
//! - **integration** - The capability contract every integration satisfies
//! - **llm** - The client contract every LLM provider constructs

/// Capability contract for integrations
pub mod integration;
/// LLM client port
pub mod llm;

pub use integration::Integration;
pub use llm::LlmClient;
