//! Domain Services
//!
//! Services that encapsulate the registry logic of the application layer.
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`IntegrationRegistry`] | Named integration table with entry-point and module discovery |
//! | [`DiscoveryReport`] | Integrations registered by a discovery run plus per-candidate failures |

/// Integration registry and discovery strategies
pub mod integration_registry;

pub use integration_registry::{
    CandidateError, DiscoveryReport, IntegrationRegistry, Strategy, conform,
};
