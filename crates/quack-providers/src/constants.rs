//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in quack-domain) and infrastructure constants.

use std::time::Duration;

// ============================================================================
// MOCK PROVIDER CONSTANTS
// ============================================================================

/// Model reported by the mock client when none is configured
pub const MOCK_DEFAULT_MODEL: &str = "mock-model";

/// Reply used by the mock client when its script is empty
pub const MOCK_DEFAULT_RESPONSE: &str = "This is a mock response.";

// ============================================================================
// OPENAI CONSTANTS
// ============================================================================

/// OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when neither config nor request names one
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o";

/// Environment variable holding the OpenAI API key
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

// ============================================================================
// ANTHROPIC CONSTANTS
// ============================================================================

/// Anthropic API base URL
pub const ANTHROPIC_DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Model used when neither config nor request names one
pub const ANTHROPIC_DEFAULT_MODEL: &str = "claude-3-opus-20240229";

/// Environment variable holding the Anthropic API key
pub const ANTHROPIC_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Value sent in the `anthropic-version` header
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// The messages API requires `max_tokens`; used when the request sets none
pub const ANTHROPIC_DEFAULT_MAX_TOKENS: u32 = 1024;

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Request timeout when the provider config sets none
pub const DEFAULT_LLM_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Delay before the first retry; doubles on each further attempt
pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

/// Prefix of the error raised when a request times out
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Rough characters-per-token ratio for local token estimates
pub const CHARS_PER_TOKEN_ESTIMATE: usize = 4;
