//! Integration bootstrap
//!
//! Composition root for integrations: builds the registry with its default
//! sources (linkme entry points and the module catalog), runs discovery when
//! configured, then loads the configured modules in order.
//!
//! ```text
//! IntegrationsConfig ─► IntegrationRegistry::new()
//!                          ├─ discover()                 (discover_on_startup)
//!                          └─ load_integration_module()  (each of modules)
//! ```
//!
//! Failures never abort startup: discovery failures live in the returned
//! reports and modules that cannot be resolved are logged and skipped.

use quack_application::{DiscoveryReport, IntegrationRegistry};
use quack_domain::error::Error;
use tracing::{error, info};

use crate::config::IntegrationsConfig;

/// Result of bootstrapping integrations
#[derive(Debug)]
pub struct IntegrationBootstrap {
    /// Registry holding every integration that was accepted
    pub registry: IntegrationRegistry,
    /// Entry point discovery outcome, when discovery ran
    pub discovery: Option<DiscoveryReport>,
    /// Per-module outcome for modules that resolved
    pub modules: Vec<(String, DiscoveryReport)>,
    /// Modules that could not be resolved at all
    pub failed_modules: Vec<(String, Error)>,
}

impl IntegrationBootstrap {
    /// Whether any candidate or module failed
    pub fn has_failures(&self) -> bool {
        !self.failed_modules.is_empty()
            || self.discovery.as_ref().is_some_and(DiscoveryReport::has_failures)
            || self.modules.iter().any(|(_, report)| report.has_failures())
    }
}

/// Bootstrap integrations using the default discovery sources
pub fn bootstrap_integrations(config: &IntegrationsConfig) -> IntegrationBootstrap {
    bootstrap_with_registry(IntegrationRegistry::new(), config)
}

/// Bootstrap integrations into a preconfigured registry
pub fn bootstrap_with_registry(
    mut registry: IntegrationRegistry,
    config: &IntegrationsConfig,
) -> IntegrationBootstrap {
    let discovery = config.discover_on_startup.then(|| registry.discover());

    let mut modules = Vec::new();
    let mut failed_modules = Vec::new();
    for module in &config.modules {
        match registry.load_integration_module(module) {
            Ok(report) => modules.push((module.clone(), report)),
            Err(e) => {
                error!(module = %module, error = %e, "Skipping integration module");
                failed_modules.push((module.clone(), e));
            }
        }
    }

    info!(
        integrations = registry.len(),
        failed_modules = failed_modules.len(),
        "Integrations bootstrapped"
    );

    IntegrationBootstrap {
        registry,
        discovery,
        modules,
        failed_modules,
    }
}
