//! Environment variable configuration tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p quack-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use std::env;

use quack_infrastructure::config::ConfigLoader;
use tempfile::TempDir;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn loader_without_file(temp_dir: &TempDir) -> ConfigLoader {
    ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"))
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_double_underscore_env_vars_are_loaded() {
    let temp_dir = TempDir::new().unwrap();
    set_env("QUACK__LLM__DEFAULT_PROVIDER", "mock");
    set_env("QUACK__LLM__TIMEOUT_SECS", "15");

    let config = loader_without_file(&temp_dir).load();

    remove_env("QUACK__LLM__DEFAULT_PROVIDER");
    remove_env("QUACK__LLM__TIMEOUT_SECS");

    let config = config.expect("Should load config");
    assert_eq!(config.llm.default_provider, "mock");
    assert_eq!(config.llm.timeout_secs, 15);
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("quack.toml");
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
    set_env("QUACK__LOGGING__LEVEL", "debug");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("QUACK__LOGGING__LEVEL");

    assert_eq!(config.expect("Should load config").logging.level, "debug");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_not_loaded() {
    let temp_dir = TempDir::new().unwrap();
    set_env("QUACK_LLM_DEFAULT_PROVIDER", "mock");

    let config = loader_without_file(&temp_dir).load();

    remove_env("QUACK_LLM_DEFAULT_PROVIDER");

    assert_eq!(config.expect("Should load config").llm.default_provider, "openai");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    let temp_dir = TempDir::new().unwrap();
    set_env("DUCKTEST__INTEGRATIONS__DISCOVER_ON_STARTUP", "false");

    let config = loader_without_file(&temp_dir)
        .with_env_prefix("DUCKTEST")
        .load();

    remove_env("DUCKTEST__INTEGRATIONS__DISCOVER_ON_STARTUP");

    assert!(!config.expect("Should load config").integrations.discover_on_startup);
}
