//! Unit tests for domain error types

use std::error::Error as _;

use quack_domain::Error;

#[test]
fn test_duplicate_name_error() {
    let error = Error::duplicate_name("pandoc");
    assert!(error.is_duplicate_name());
    assert_eq!(
        error.to_string(),
        "Integration 'pandoc' is already registered"
    );
}

#[test]
fn test_unsupported_provider_lists_registered_names() {
    let error = Error::unsupported_provider(
        "unknown",
        vec!["anthropic".to_string(), "mock".to_string()],
    );

    assert!(error.is_unsupported_provider());
    let display_str = error.to_string();
    assert!(display_str.contains("Unsupported LLM provider: unknown"));
    assert!(display_str.contains("Registered providers"));
    assert!(display_str.contains("anthropic, mock"));
}

#[test]
fn test_provider_construction_preserves_cause() {
    let cause = Error::authentication("OpenAI requires api_key");
    let error = Error::provider_construction("openai", cause);

    match &error {
        Error::ProviderConstruction { provider, .. } => assert_eq!(provider, "openai"),
        _ => panic!("Expected ProviderConstruction error"),
    }

    let source = error.source().expect("construction error should carry a cause");
    assert!(source.to_string().contains("OpenAI requires api_key"));
}

#[test]
fn test_module_load_with_source() {
    let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such module");
    let error = Error::module_load_with_source("plugins.missing", cause);

    match &error {
        Error::ModuleLoad {
            module_path,
            message,
            source,
        } => {
            assert_eq!(module_path, "plugins.missing");
            assert_eq!(message, "no such module");
            assert!(source.is_some());
        }
        _ => panic!("Expected ModuleLoad error"),
    }
    assert!(error.to_string().contains("plugins.missing"));
}

#[test]
fn test_not_initialized_error() {
    let error = Error::not_initialized("LLM client");
    assert_eq!(error.to_string(), "LLM client not initialized");
}

#[test]
fn test_error_from_string() {
    let error: Error = "boom".into();
    match error {
        Error::Internal { message } => assert_eq!(message, "boom"),
        _ => panic!("Expected Internal error"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::other("disk full");
    let error: Error = io_error.into();
    assert!(error.to_string().contains("disk full"));
}
