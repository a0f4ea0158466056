//! Integration Registry
//!
//! Keeps the table of named integrations and fills it from entry points,
//! a plugin loader and integration modules.
//!
//! ## Discovery
//!
//! | Operation | Chain |
//! |-----------|-------|
//! | [`IntegrationRegistry::discover`] | plugin loader → entry point `load()` + factory call |
//! | [`IntegrationRegistry::load_integration_module`] | plugin loader → `create_integration` → test integration + members |
//!
//! Every candidate passes the same conformance check before it is
//! registered. Per-candidate failures are logged and collected in the
//! returned [`DiscoveryReport`]; they never abort the run.
//!
//! ## Concurrency
//!
//! The registry does no locking of its own. Everything that mutates the
//! table takes `&mut self`; hosts that share a registry across threads wrap
//! it in a single `Mutex`.

mod conformance;
mod discovery;
mod report;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use quack_domain::constants::INTEGRATION_ENTRY_POINT_GROUP;
use quack_domain::error::{Error, Result};
use quack_domain::ports::Integration;
use tracing::{debug, error, info, warn};

use crate::ports::PluginLoader;
use crate::ports::registry::{
    EntryPointSource, IntegrationModule, ModuleCatalog, ModuleResolver, RegisteredEntryPoints,
};

pub use conformance::conform;
pub use discovery::Strategy;
pub use report::{CandidateError, DiscoveryReport};

/// Registry of named integrations
pub struct IntegrationRegistry {
    integrations: BTreeMap<String, Arc<dyn Integration>>,
    entry_points: Arc<dyn EntryPointSource>,
    plugin_loader: Option<Arc<dyn PluginLoader>>,
    modules: Arc<dyn ModuleResolver>,
}

impl IntegrationRegistry {
    /// Empty registry reading the compile-time entry-point and module slices
    pub fn new() -> Self {
        Self {
            integrations: BTreeMap::new(),
            entry_points: Arc::new(RegisteredEntryPoints),
            plugin_loader: None,
            modules: Arc::new(ModuleCatalog::new()),
        }
    }

    /// Use `source` to enumerate entry points
    pub fn with_entry_points(mut self, source: impl EntryPointSource + 'static) -> Self {
        self.entry_points = Arc::new(source);
        self
    }

    /// Try `loader` before any built-in strategy
    pub fn with_plugin_loader(mut self, loader: impl PluginLoader + 'static) -> Self {
        self.plugin_loader = Some(Arc::new(loader));
        self
    }

    /// Use `resolver` to resolve module identifiers
    pub fn with_module_resolver(mut self, resolver: impl ModuleResolver + 'static) -> Self {
        self.modules = Arc::new(resolver);
        self
    }

    /// Whether a plugin loader is configured
    pub fn has_plugin_loader(&self) -> bool {
        self.plugin_loader.is_some()
    }

    /// Register an integration under its own name
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateName`] if the name is taken; the table is left
    /// unchanged.
    pub fn register(&mut self, integration: Arc<dyn Integration>) -> Result<()> {
        let name = integration.name().to_string();
        if self.integrations.contains_key(&name) {
            return Err(Error::duplicate_name(name));
        }

        debug!(integration = %name, version = %integration.version(), "Registered integration");
        self.integrations.insert(name, integration);
        Ok(())
    }

    /// Remove the integration registered under `name`
    ///
    /// Returns `false`, and logs a warning, if nothing was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        if self.integrations.remove(name).is_some() {
            debug!(integration = %name, "Unregistered integration");
            true
        } else {
            warn!(integration = %name, "Integration not registered");
            false
        }
    }

    /// Look up an integration by exact name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Integration>> {
        self.integrations.get(name).cloned()
    }

    /// Registered integrations whose concrete type is `T`
    ///
    /// The iterator is lazy and can be recreated at any time; order is
    /// unspecified.
    pub fn get_by_type<T: Integration>(&self) -> impl Iterator<Item = Arc<T>> {
        self.integrations
            .values()
            .filter_map(|integration| Arc::clone(integration).downcast_arc::<T>().ok())
    }

    /// Registered integrations accepted by `predicate`
    pub fn filter<P>(&self, predicate: P) -> impl Iterator<Item = Arc<dyn Integration>>
    where
        P: Fn(&dyn Integration) -> bool,
    {
        self.integrations
            .values()
            .filter(move |integration| predicate(Arc::as_ref(integration)))
            .cloned()
    }

    /// Snapshot of the registered names
    pub fn list_names(&self) -> Vec<String> {
        self.integrations.keys().cloned().collect()
    }

    /// Whether `name` is registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.integrations.contains_key(name)
    }

    /// Number of registered integrations
    pub fn len(&self) -> usize {
        self.integrations.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.integrations.is_empty()
    }

    /// Register every conformant integration declared as an entry point
    ///
    /// Running discovery again reports a duplicate-name failure for every
    /// integration the earlier run registered.
    pub fn discover(&mut self) -> DiscoveryReport {
        let mut report = DiscoveryReport::default();

        let entries = match self.entry_points.entry_points(INTEGRATION_ENTRY_POINT_GROUP) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Could not discover integrations using entry points");
                return report;
            }
        };

        let loader = self.plugin_loader.clone();
        for entry in &entries {
            debug!(entry_point = %entry.name, "Loading integration from entry point");
            match discovery::from_entry_point(entry, loader.as_deref()) {
                Ok(integration) => {
                    self.accept(&mut report, &entry.name, integration);
                }
                Err(e) => {
                    error!(entry_point = %entry.name, error = %e, "Failed to load integration from entry point");
                    report.push_failure(&entry.name, e);
                }
            }
        }

        info!(
            registered = report.len(),
            failed = report.failures.len(),
            "Integration discovery finished"
        );
        report
    }

    /// Register the integrations provided by the module at `identifier`
    ///
    /// The first strategy in [`Strategy::MODULE_CHAIN`] that registers
    /// something ends the chain, except module members, which are all
    /// registered together. A module that yields nothing produces an empty
    /// report and a warning.
    ///
    /// # Errors
    ///
    /// [`Error::ModuleLoad`] if the module cannot be resolved. Nothing is
    /// registered in that case.
    pub fn load_integration_module(&mut self, identifier: &str) -> Result<DiscoveryReport> {
        let mut report = DiscoveryReport::default();
        let mut module: Option<Arc<IntegrationModule>> = None;
        let mut loader_failure: Option<CandidateError> = None;

        for strategy in Strategy::MODULE_CHAIN {
            let finished = match strategy {
                Strategy::PluginLoader => {
                    let Some(loader) = self.plugin_loader.clone() else {
                        continue;
                    };
                    match discovery::from_plugin_loader(loader.as_ref(), identifier) {
                        Ok(integration) => self.accept(&mut report, identifier, integration),
                        Err(e) => {
                            debug!(module = %identifier, error = %e, "Plugin loader produced no integration, falling back");
                            loader_failure = Some(e);
                            false
                        }
                    }
                }
                Strategy::Factory => {
                    let module = self.resolve_module(identifier, &mut module)?;
                    match discovery::from_factory(&module) {
                        Some((candidate, Ok(integration))) => {
                            self.accept(&mut report, &candidate, integration)
                        }
                        Some((candidate, Err(e))) => {
                            error!(module = %identifier, error = %e, "Error calling create_integration");
                            report.push_failure(candidate, e);
                            false
                        }
                        None => false,
                    }
                }
                Strategy::ModuleMembers => {
                    let module = self.resolve_module(identifier, &mut module)?;
                    for (candidate, result) in discovery::from_members(&module) {
                        match result {
                            Ok(integration) => {
                                self.accept(&mut report, &candidate, integration);
                            }
                            Err(e) => {
                                error!(module = %identifier, candidate = %candidate, error = %e, "Error instantiating module member");
                                report.push_failure(candidate, e);
                            }
                        }
                    }
                    true
                }
                Strategy::EntryPointLoad => false,
            };

            if finished {
                break;
            }
        }

        if report.is_empty() {
            if let Some(e) = loader_failure {
                report.push_failure(identifier, e);
            }
            warn!(module = %identifier, "No integrations found in module");
        }

        Ok(report)
    }

    fn resolve_module(
        &self,
        identifier: &str,
        slot: &mut Option<Arc<IntegrationModule>>,
    ) -> Result<Arc<IntegrationModule>> {
        if let Some(module) = slot {
            return Ok(Arc::clone(module));
        }

        let module = self.modules.resolve(identifier).map_err(|e| {
            error!(module = %identifier, error = %e, "Failed to import integration module");
            match e {
                e @ Error::ModuleLoad { .. } => e,
                other => Error::module_load_with_source(identifier, other),
            }
        })?;
        *slot = Some(Arc::clone(&module));
        Ok(module)
    }

    // Returns true when the candidate ended up in the table.
    fn accept(
        &mut self,
        report: &mut DiscoveryReport,
        candidate: &str,
        integration: Arc<dyn Integration>,
    ) -> bool {
        match self.register(Arc::clone(&integration)) {
            Ok(()) => {
                report.push_integration(integration);
                true
            }
            Err(e) => {
                error!(candidate = %candidate, error = %e, "Error registering integration");
                report.push_failure(candidate, CandidateError::Registration(e));
                false
            }
        }
    }
}

impl Default for IntegrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for IntegrationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationRegistry")
            .field("integrations", &self.list_names())
            .field("plugin_loader", &self.plugin_loader.is_some())
            .finish_non_exhaustive()
    }
}
