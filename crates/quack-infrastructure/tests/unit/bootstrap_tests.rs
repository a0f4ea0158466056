//! Integration bootstrap tests
//!
//! The built-in providers are linked through `quack_infrastructure`, so the
//! `llm` entry point and the `quack_providers.llm` module are available.

use quack_application::{IntegrationRegistry, StaticEntryPoints};
use quack_domain::error::Error;
use quack_infrastructure::bootstrap::{bootstrap_integrations, bootstrap_with_registry};
use quack_infrastructure::config::IntegrationsConfig;
use quack_providers::LLM_MODULE_PATH;

fn config(discover: bool, modules: &[&str]) -> IntegrationsConfig {
    IntegrationsConfig {
        discover_on_startup: discover,
        modules: modules.iter().map(|m| m.to_string()).collect(),
    }
}

#[test]
fn test_nothing_configured_gives_empty_registry() {
    let outcome = bootstrap_integrations(&config(false, &[]));

    assert!(outcome.registry.is_empty());
    assert!(outcome.discovery.is_none());
    assert!(outcome.modules.is_empty());
    assert!(!outcome.has_failures());
}

#[test]
fn test_discovery_registers_builtin_llm() {
    let outcome = bootstrap_integrations(&IntegrationsConfig::default());

    assert!(outcome.registry.is_registered("LLM"));
    let discovery = outcome.discovery.as_ref().unwrap();
    assert!(discovery.names().contains(&"LLM".to_string()));
}

#[test]
fn test_configured_module_is_loaded() {
    let outcome = bootstrap_integrations(&config(false, &[LLM_MODULE_PATH]));

    assert_eq!(outcome.registry.list_names(), vec!["LLM".to_string()]);
    assert_eq!(outcome.modules.len(), 1);
    assert_eq!(outcome.modules[0].0, LLM_MODULE_PATH);
    assert_eq!(outcome.modules[0].1.names(), vec!["LLM".to_string()]);
}

#[test]
fn test_unknown_module_is_skipped() {
    let outcome = bootstrap_integrations(&config(false, &["acme.missing", LLM_MODULE_PATH]));

    assert!(outcome.registry.is_registered("LLM"));
    assert_eq!(outcome.failed_modules.len(), 1);
    let (module, err) = &outcome.failed_modules[0];
    assert_eq!(module, "acme.missing");
    assert!(matches!(err, Error::ModuleLoad { .. }));
    assert!(outcome.has_failures());
}

#[test]
fn test_module_after_discovery_reports_duplicate() {
    let outcome = bootstrap_integrations(&config(true, &[LLM_MODULE_PATH]));

    assert_eq!(outcome.registry.len(), 1);
    let (_, report) = &outcome.modules[0];
    assert!(report.is_empty());
    assert!(report.failures.iter().any(|(_, e)| e.is_duplicate_name()));
    assert!(outcome.has_failures());
}

#[test]
fn test_preconfigured_registry_sources_are_used() {
    let registry = IntegrationRegistry::new().with_entry_points(StaticEntryPoints::new(Vec::new()));

    let outcome = bootstrap_with_registry(registry, &IntegrationsConfig::default());

    assert!(outcome.registry.is_empty());
    assert!(outcome.discovery.unwrap().is_empty());
}
