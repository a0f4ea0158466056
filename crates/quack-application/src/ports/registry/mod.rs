//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for integrations and LLM
//! providers. Uses the `linkme` crate for compile-time registration of
//! entries that are discovered and instantiated at runtime, which takes the
//! place of packaging metadata and module introspection.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Plugin defines:    #[linkme::distributed_slice(SLICE)]      │
//! │                        static ENTRY: Entry = ...                │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static SLICE: [Entry] = [..]         │
//! │                              ↓                                  │
//! │  3. Resolver queries:  SLICE.iter()                             │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = mock" → MockLlmClient        │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Three slices are declared here:
//!
//! | Slice | Entry | Consumer |
//! |-------|-------|----------|
//! | [`INTEGRATION_ENTRY_POINTS`] | [`IntegrationEntryPointEntry`] | `IntegrationRegistry::discover` |
//! | [`INTEGRATION_MODULES`] | [`IntegrationModuleEntry`] | `IntegrationRegistry::load_integration_module` |
//! | [`LLM_PROVIDERS`] | [`LlmProviderEntry`] | [`LlmProviderRegistry`] |
//!
//! ## Usage
//!
//! ### Registering an LLM provider (in quack-providers)
//!
//! ```ignore
//! use quack_application::ports::registry::{LlmProviderEntry, LLM_PROVIDERS};
//!
//! #[linkme::distributed_slice(LLM_PROVIDERS)]
//! static MOCK_PROVIDER: LlmProviderEntry = LlmProviderEntry {
//!     name: "mock",
//!     description: "Deterministic scripted client for tests",
//!     factory: |config| Ok(Arc::new(MockLlmClient::from_config(config))),
//! };
//! ```
//!
//! ### Resolving a provider
//!
//! ```ignore
//! use quack_application::ports::registry::{LlmProviderConfig, resolve_llm_provider};
//!
//! let client = resolve_llm_provider(&LlmProviderConfig::new("mock"))?;
//! ```

pub mod entry_points;
pub mod llm;
pub mod modules;

// Re-export all registry types and functions
pub use entry_points::{
    EntryPointSource, INTEGRATION_ENTRY_POINTS, IntegrationEntryPointEntry, RegisteredEntryPoints,
    StaticEntryPoints, list_entry_points,
};
pub use llm::{
    LLM_PROVIDERS, LlmProviderConfig, LlmProviderConstructor, LlmProviderEntry,
    LlmProviderRegistry, list_llm_providers, resolve_llm_provider,
};
pub use modules::{
    INTEGRATION_MODULES, IntegrationModule, IntegrationModuleEntry, MemberConstructor,
    ModuleBuilder, ModuleCatalog, ModuleResolver, list_integration_modules,
};
