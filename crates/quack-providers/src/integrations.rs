//! Built-in integrations
//!
//! Declares the LLM service facade as entry point `llm` in the
//! `quackcore.integrations` group, and as the integration module
//! `quack_providers.llm` for explicit loading.

use quack_application::ports::registry::{
    INTEGRATION_ENTRY_POINTS, INTEGRATION_MODULES, IntegrationEntryPointEntry,
    IntegrationModuleEntry, ModuleBuilder,
};
use quack_application::use_cases::LlmIntegration;
use quack_domain::constants::INTEGRATION_ENTRY_POINT_GROUP;
use quack_domain::error::Result;
use quack_domain::value_objects::LoadedObject;

/// Module path the LLM facade can be loaded from
pub const LLM_MODULE_PATH: &str = "quack_providers.llm";

fn create_llm_integration() -> Result<LoadedObject> {
    Ok(LoadedObject::instance(LlmIntegration::new()))
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(INTEGRATION_ENTRY_POINTS)]
static LLM_ENTRY_POINT: IntegrationEntryPointEntry = IntegrationEntryPointEntry {
    group: INTEGRATION_ENTRY_POINT_GROUP,
    name: "llm",
    value: LLM_MODULE_PATH,
    load: || Ok(LoadedObject::factory(create_llm_integration)),
};

#[linkme::distributed_slice(INTEGRATION_MODULES)]
static LLM_MODULE: IntegrationModuleEntry = IntegrationModuleEntry {
    path: LLM_MODULE_PATH,
    description: "LLM service facade over the registered LLM providers",
    init: declare_llm_module,
};

fn declare_llm_module(module: &mut ModuleBuilder) {
    module.factory(create_llm_integration);
}
