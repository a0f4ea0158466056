//! `quack` command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quack providers` | List registered LLM providers |
//! | `quack integrations` | Run entry point discovery and print the report |
//! | `quack load <module>` | Load an integration module and print the report |
//! | `quack chat --provider <p> <prompt>` | Send one message through the LLM facade |
//!
//! Every command renders its output as a string so the binary only prints.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use quack_application::{DiscoveryReport, IntegrationRegistry, LlmIntegration, list_llm_providers};
use quack_domain::error::Result;
use quack_domain::ports::Integration;
use quack_domain::value_objects::{ChatMessage, LlmOptions};
use quack_infrastructure::config::{AppConfig, ConfigLoader};

/// Command line interface for Quack Integrations
#[derive(Parser, Debug)]
#[command(name = "quack")]
#[command(about = "Quack Integrations - discover integrations and talk to LLM providers")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML or YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered LLM providers
    Providers,

    /// Run entry point discovery and print the report
    Integrations,

    /// Load an integration module by path
    Load {
        /// Module path, e.g. `quack_providers.llm`
        module: String,
    },

    /// Send one message through the LLM facade
    Chat {
        /// Provider name (defaults to `llm.default_provider`)
        #[arg(short, long)]
        provider: Option<String>,

        /// Model override
        #[arg(short, long)]
        model: Option<String>,

        /// Optional system prompt
        #[arg(long)]
        system: Option<String>,

        /// User message
        prompt: String,
    },
}

/// Load configuration from an explicit path or the default locations
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let loader = ConfigLoader::new();
    match path {
        Some(path) => loader.with_config_path(path).load(),
        None => loader.load(),
    }
}

/// Run a command and return what should be printed
pub async fn execute(command: &Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Providers => Ok(render_providers()),
        Command::Integrations => {
            let mut registry = IntegrationRegistry::new();
            let report = registry.discover();
            Ok(render_report("Discovered integrations", &report))
        }
        Command::Load { module } => {
            let mut registry = IntegrationRegistry::new();
            let report = registry.load_integration_module(module)?;
            Ok(render_report(&format!("Module {module}"), &report))
        }
        Command::Chat {
            provider,
            model,
            system,
            prompt,
        } => {
            let mut service = LlmIntegration::new().with_config(config.llm.clone());
            if let Some(provider) = provider {
                service = service.with_provider(provider);
            }
            if let Some(model) = model {
                service = service.with_model(model);
            }
            service.initialize()?;

            let mut messages = Vec::with_capacity(2);
            if let Some(system) = system {
                messages.push(ChatMessage::system(system));
            }
            messages.push(ChatMessage::user(prompt));

            let response = service.chat(&messages, &LlmOptions::default()).await?;
            Ok(response.content)
        }
    }
}

/// Table of registered LLM providers, sorted by name
pub fn render_providers() -> String {
    let mut providers = list_llm_providers();
    providers.sort_by_key(|(name, _)| *name);

    let width = providers.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, description) in providers {
        let _ = writeln!(out, "{name:<width$}  {description}");
    }
    out
}

/// Human-readable discovery report
pub fn render_report(title: &str, report: &DiscoveryReport) -> String {
    let mut out = format!(
        "{title}: {} registered, {} failed\n",
        report.len(),
        report.failures.len()
    );
    for integration in &report.integrations {
        let _ = writeln!(out, "  + {} {}", integration.name(), integration.version());
    }
    for (candidate, error) in &report.failures {
        let _ = writeln!(out, "  ! {candidate}: {error}");
    }
    out
}
