//! Tests for the integration table: register, unregister and lookups

use std::sync::Arc;

use quack_application::IntegrationRegistry;
use quack_domain::ports::Integration;

use crate::fixtures::{Converter, Fixture};

fn registry_with(names: &[&str]) -> IntegrationRegistry {
    let mut registry = IntegrationRegistry::new();
    for name in names {
        registry.register(Arc::new(Fixture::new(name))).unwrap();
    }
    registry
}

#[test]
fn test_registered_names_are_listed() {
    let registry = registry_with(&["pandoc", "google_drive", "github"]);

    let mut names = registry.list_names();
    names.sort();
    assert_eq!(names, vec!["github", "google_drive", "pandoc"]);
    assert_eq!(registry.len(), 3);
    assert!(registry.is_registered("pandoc"));
    assert!(!registry.is_registered("Pandoc"));
}

#[test]
fn test_duplicate_register_fails_and_keeps_original() {
    let mut registry = IntegrationRegistry::new();
    let original: Arc<dyn Integration> = Arc::new(Fixture::versioned("pandoc", "1.0.0"));
    registry.register(Arc::clone(&original)).unwrap();

    let err = registry
        .register(Arc::new(Fixture::versioned("pandoc", "2.0.0")))
        .unwrap_err();

    assert!(err.is_duplicate_name());
    assert_eq!(err.to_string(), "Integration 'pandoc' is already registered");
    assert_eq!(registry.len(), 1);
    let stored = registry.get("pandoc").unwrap();
    assert!(Arc::ptr_eq(&stored, &original));
    assert_eq!(stored.version(), "1.0.0");
}

#[test]
fn test_unregister_present_and_absent() {
    let mut registry = registry_with(&["pandoc", "github"]);

    assert!(registry.unregister("pandoc"));
    assert!(!registry.is_registered("pandoc"));
    assert!(registry.get("pandoc").is_none());

    assert!(!registry.unregister("pandoc"));
    assert_eq!(registry.list_names(), vec!["github"]);
}

#[test]
fn test_get_unknown_returns_none() {
    let registry = IntegrationRegistry::new();
    assert!(registry.get("missing").is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_get_by_type_without_matches_is_empty() {
    let registry = registry_with(&["pandoc", "github"]);
    assert_eq!(registry.get_by_type::<Converter>().count(), 0);
}

#[test]
fn test_get_by_type_returns_every_match() {
    let mut registry = registry_with(&["pandoc", "github"]);
    registry.register(Arc::new(Converter)).unwrap();

    let mut names: Vec<String> = registry
        .get_by_type::<Fixture>()
        .map(|f| f.name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["github", "pandoc"]);

    // A fresh iterator sees the same integrations again
    assert_eq!(registry.get_by_type::<Fixture>().count(), 2);
    assert_eq!(registry.get_by_type::<Converter>().count(), 1);
}

#[test]
fn test_filter_by_capability_predicate() {
    let mut registry = registry_with(&["pandoc", "github"]);
    registry.register(Arc::new(Converter)).unwrap();
    registry.get("pandoc").unwrap().initialize().unwrap();

    let mut available: Vec<String> = registry
        .filter(|i| i.is_available())
        .map(|i| i.name().to_string())
        .collect();
    available.sort();
    assert_eq!(available, vec!["converter", "pandoc"]);

    assert_eq!(registry.filter(|_| false).count(), 0);
    assert_eq!(registry.filter(|_| true).count(), 3);
}
