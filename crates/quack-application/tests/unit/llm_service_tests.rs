//! Tests for the LLM service facade

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use quack_application::ports::registry::{
    LlmProviderConfig, LlmProviderRegistry, resolve_llm_provider,
};
use quack_application::{IntegrationRegistry, LlmIntegration};
use quack_domain::error::Error;
use quack_domain::ports::Integration;
use quack_domain::value_objects::{ChatMessage, LlmConfig, LlmOptions, LlmProviderSettings};

fn mock_config() -> LlmConfig {
    let mut providers = BTreeMap::new();
    providers.insert(
        "mock".to_string(),
        LlmProviderSettings {
            model: Some("mock-large".to_string()),
            api_key: Some("config-key".to_string()),
            base_url: None,
        },
    );
    LlmConfig {
        default_provider: "mock".to_string(),
        providers,
        ..LlmConfig::default()
    }
}

#[test]
fn test_identity() {
    let service = LlmIntegration::new();
    assert_eq!(service.name(), "LLM");
    assert_eq!(service.version(), "1.0.0");
    assert!(!service.is_available());
}

#[tokio::test]
async fn test_requests_before_initialize_fail() {
    let service = LlmIntegration::new().with_provider("mock");
    let messages = [ChatMessage::user("hi")];

    let err = service
        .chat(&messages, &LlmOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotInitialized { .. }));
    assert_eq!(err.to_string(), "LLM client not initialized");

    assert!(service.count_tokens(&messages).await.is_err());
    assert!(service.client().is_err());
}

#[tokio::test]
async fn test_initialize_with_mock_provider() {
    let service = LlmIntegration::new()
        .with_provider("MOCK")
        .with_script(["Hello!", "Bye!"])
        .with_token_counts([12, 30]);

    service.initialize().unwrap();
    assert!(service.is_available());

    let messages = [ChatMessage::user("hi")];
    let options = LlmOptions::default();
    assert_eq!(service.chat(&messages, &options).await.unwrap().content, "Hello!");
    assert_eq!(service.chat(&messages, &options).await.unwrap().content, "Bye!");
    assert_eq!(service.count_tokens(&messages).await.unwrap(), 12);
    assert_eq!(service.count_tokens(&messages).await.unwrap(), 30);
    assert_eq!(service.client().unwrap().provider_name(), "mock");
}

#[test]
fn test_unknown_provider_leaves_service_uninitialized() {
    let service = LlmIntegration::new().with_provider("unknown");

    let err = service.initialize().unwrap_err();

    assert!(err.is_unsupported_provider());
    assert!(!service.is_available());
}

#[test]
fn test_config_supplies_provider_and_settings() {
    let service = LlmIntegration::new().with_config(mock_config());

    assert_eq!(service.provider(), "mock");
    let options = service.provider_config();
    assert_eq!(options.model.as_deref(), Some("mock-large"));
    assert_eq!(options.api_key.as_deref(), Some("config-key"));
    assert_eq!(options.timeout.map(|t| t.as_secs()), Some(60));

    service.initialize().unwrap();
    assert_eq!(service.client().unwrap().model(), "mock-large");
}

#[test]
fn test_overrides_win_over_config() {
    let service = LlmIntegration::new()
        .with_config(mock_config())
        .with_model("mock-small")
        .with_api_key("override-key");

    let options = service.provider_config();
    assert_eq!(options.provider, "mock");
    assert_eq!(options.model.as_deref(), Some("mock-small"));
    assert_eq!(options.api_key.as_deref(), Some("override-key"));
}

#[test]
fn test_defaults_apply_without_config() {
    let service = LlmIntegration::new();
    assert_eq!(service.provider(), "openai");
    assert_eq!(service.provider_config().model.as_deref(), Some("gpt-4o"));
}

#[test]
fn test_construction_failure_is_reported() {
    let mut providers = LlmProviderRegistry::new();
    providers.register("broken", |_config: &LlmProviderConfig| {
        Err(Error::config("missing endpoint"))
    });
    let service = LlmIntegration::with_provider_registry(providers).with_provider("broken");

    let err = service.initialize().unwrap_err();

    assert!(matches!(err, Error::ProviderConstruction { .. }));
    assert!(!service.is_available());
}

#[test]
fn test_failed_reinitialize_drops_previous_client() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut providers = LlmProviderRegistry::new();
    providers.register("flaky", move |config: &LlmProviderConfig| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            resolve_llm_provider(&LlmProviderConfig {
                provider: "mock".to_string(),
                ..config.clone()
            })
        } else {
            Err(Error::authentication("credentials revoked"))
        }
    });
    let service = LlmIntegration::with_provider_registry(providers).with_provider("flaky");

    service.initialize().unwrap();
    assert!(service.is_available());

    let err = service.initialize().unwrap_err();

    assert!(matches!(err, Error::ProviderConstruction { .. }));
    assert!(!service.is_available());
    assert!(matches!(
        service.client().err().unwrap(),
        Error::NotInitialized { .. }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_retry_count_reaches_provider_options() {
    let service = LlmIntegration::new().with_config(mock_config());
    assert_eq!(service.provider_config().retry_count, Some(3));
}

#[test]
fn test_facade_registers_as_integration() {
    let mut registry = IntegrationRegistry::new();
    registry
        .register(Arc::new(LlmIntegration::new().with_provider("mock")))
        .unwrap();

    let services: Vec<Arc<LlmIntegration>> = registry.get_by_type::<LlmIntegration>().collect();
    assert_eq!(services.len(), 1);
    services[0].initialize().unwrap();
    assert!(registry.get("LLM").unwrap().is_available());
}
