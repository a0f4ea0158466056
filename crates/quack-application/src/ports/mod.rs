//! Application Port Interfaces
//!
//! Boundary contracts the application layer consumes from hosts and
//! plugins.
//!
//! ## Organization
//!
//! - **plugin_loader.rs** - Optional external plugin loader
//! - **registry/** - Auto-registration system for entry points, modules and LLM providers

/// Optional plugin loader collaborator
pub mod plugin_loader;
/// Provider registry for dynamic provider discovery
pub mod registry;

pub use plugin_loader::PluginLoader;
pub use registry::{
    EntryPointSource, INTEGRATION_ENTRY_POINTS, INTEGRATION_MODULES, IntegrationEntryPointEntry,
    IntegrationModule, IntegrationModuleEntry, LLM_PROVIDERS, LlmProviderConfig,
    LlmProviderConstructor, LlmProviderEntry, LlmProviderRegistry, ModuleBuilder, ModuleCatalog,
    ModuleResolver, RegisteredEntryPoints, StaticEntryPoints, list_llm_providers,
    resolve_llm_provider,
};
