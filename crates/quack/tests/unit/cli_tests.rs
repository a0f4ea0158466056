//! CLI command tests

use std::fs;

use quack::cli::{Command, execute, load_config};
use quack::domain::error::Error;
use quack::infrastructure::AppConfig;
use quack::providers::LLM_MODULE_PATH;
use tempfile::TempDir;

fn chat(provider: &str, prompt: &str) -> Command {
    Command::Chat {
        provider: Some(provider.to_string()),
        model: None,
        system: None,
        prompt: prompt.to_string(),
    }
}

#[tokio::test]
async fn test_providers_lists_builtins() {
    let output = execute(&Command::Providers, &AppConfig::default())
        .await
        .unwrap();

    let names: Vec<&str> = output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(names, ["anthropic", "mock", "openai"]);
}

#[tokio::test]
async fn test_integrations_reports_llm() {
    let output = execute(&Command::Integrations, &AppConfig::default())
        .await
        .unwrap();

    assert!(output.starts_with("Discovered integrations:"));
    assert!(output.contains("  + LLM 1.0.0"));
}

#[tokio::test]
async fn test_load_builtin_module() {
    let command = Command::Load {
        module: LLM_MODULE_PATH.to_string(),
    };
    let output = execute(&command, &AppConfig::default()).await.unwrap();

    assert!(output.starts_with(&format!("Module {LLM_MODULE_PATH}: 1 registered, 0 failed")));
}

#[tokio::test]
async fn test_load_unknown_module_fails() {
    let command = Command::Load {
        module: "acme.nowhere".to_string(),
    };
    let err = execute(&command, &AppConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ModuleLoad { .. }));
}

#[tokio::test]
async fn test_chat_through_mock_provider() {
    let output = execute(&chat("mock", "hello"), &AppConfig::default())
        .await
        .unwrap();

    assert_eq!(output, "This is a mock response.");
}

#[tokio::test]
async fn test_chat_uses_configured_default_provider() {
    let mut config = AppConfig::default();
    config.llm.default_provider = "MOCK".to_string();
    let command = Command::Chat {
        provider: None,
        model: None,
        system: Some("be brief".to_string()),
        prompt: "hello".to_string(),
    };

    assert!(execute(&command, &config).await.is_ok());
}

#[tokio::test]
async fn test_chat_with_unknown_provider_fails() {
    let err = execute(&chat("parrot", "hello"), &AppConfig::default())
        .await
        .unwrap_err();

    assert!(err.is_unsupported_provider());
    assert!(err.to_string().contains("parrot"));
}

#[test]
fn test_load_config_from_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("quack.yml");
    fs::write(&path, "llm:\n  default_provider: mock\n").unwrap();

    let config = load_config(Some(&path)).unwrap();

    assert_eq!(config.llm.default_provider, "mock");
}
