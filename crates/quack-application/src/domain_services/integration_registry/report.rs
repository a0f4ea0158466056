//! Discovery results

use std::fmt;
use std::sync::Arc;

use quack_domain::error::Error;
use quack_domain::ports::Integration;
use thiserror::Error as ThisError;

/// Why a single discovery candidate was not registered
#[derive(Debug, ThisError)]
pub enum CandidateError {
    /// The candidate could not be loaded or its constructor failed
    #[error("failed to load: {0}")]
    Load(#[source] Error),

    /// The entry point resolved to something that cannot be invoked
    #[error("factory is not callable")]
    NotCallable,

    /// The produced object does not satisfy the integration contract
    #[error("{type_name} does not implement the integration contract: {reason}")]
    NonConformant {
        /// Description of the produced object
        type_name: String,
        /// Which part of the contract is violated
        reason: String,
    },

    /// The candidate conformed but the registry refused it
    #[error("registration failed: {0}")]
    Registration(#[source] Error),

    /// The external plugin loader failed before the fallback ran
    #[error("plugin loader failed: {0}")]
    PluginLoader(#[source] Error),
}

impl CandidateError {
    /// Whether the registry refused the candidate because its name is taken
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, Self::Registration(e) if e.is_duplicate_name())
    }
}

/// Outcome of [`discover`](super::IntegrationRegistry::discover) or
/// [`load_integration_module`](super::IntegrationRegistry::load_integration_module)
///
/// Per-candidate failures never abort a discovery run; they are collected
/// here next to the integrations that were registered.
#[derive(Default)]
pub struct DiscoveryReport {
    /// Integrations registered by this run, in registration order
    pub integrations: Vec<Arc<dyn Integration>>,
    /// `(candidate, error)` pairs for everything that was skipped
    pub failures: Vec<(String, CandidateError)>,
}

impl DiscoveryReport {
    /// Names of the registered integrations
    pub fn names(&self) -> Vec<String> {
        self.integrations
            .iter()
            .map(|i| i.name().to_string())
            .collect()
    }

    /// True when nothing was registered
    pub fn is_empty(&self) -> bool {
        self.integrations.is_empty()
    }

    /// Number of registered integrations
    pub fn len(&self) -> usize {
        self.integrations.len()
    }

    /// True when at least one candidate failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub(crate) fn push_integration(&mut self, integration: Arc<dyn Integration>) {
        self.integrations.push(integration);
    }

    pub(crate) fn push_failure(&mut self, candidate: impl Into<String>, error: CandidateError) {
        self.failures.push((candidate.into(), error));
    }
}

impl fmt::Debug for DiscoveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryReport")
            .field("integrations", &self.names())
            .field("failures", &self.failures)
            .finish()
    }
}
