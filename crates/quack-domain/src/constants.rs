//! Domain layer constants
//!
//! Contains constants that are part of the domain logic and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `quack_infrastructure::constants`.

// ============================================================================
// INTEGRATION DISCOVERY CONSTANTS
// ============================================================================

/// Entry-point group scanned by integration discovery
pub const INTEGRATION_ENTRY_POINT_GROUP: &str = "quackcore.integrations";

/// Name of the zero-argument factory a module may declare
pub const INTEGRATION_FACTORY_NAME: &str = "create_integration";

/// Name of the lightweight in-module test fixture, always checked first
pub const TEST_INTEGRATION_MEMBER: &str = "TestIntegration";

// ============================================================================
// LLM PROVIDER CONSTANTS
// ============================================================================

/// Reserved provider name for the deterministic pass-through client
pub const MOCK_PROVIDER_NAME: &str = "mock";

/// OpenAI provider name
pub const OPENAI_PROVIDER_NAME: &str = "openai";

/// Anthropic provider name
pub const ANTHROPIC_PROVIDER_NAME: &str = "anthropic";

/// Provider used when configuration names none
pub const DEFAULT_LLM_PROVIDER: &str = OPENAI_PROVIDER_NAME;

/// Default request timeout for LLM providers in seconds
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 60;

/// Default retry count recorded in LLM configuration
pub const DEFAULT_LLM_RETRY_COUNT: u32 = 3;

// ============================================================================
// LLM INTEGRATION IDENTITY
// ============================================================================

/// Registry name of the LLM service integration
pub const LLM_INTEGRATION_NAME: &str = "LLM";

/// Version reported by the LLM service integration
pub const LLM_INTEGRATION_VERSION: &str = "1.0.0";
