//! Discovery strategies
//!
//! Each strategy turns an identifier or descriptor into a candidate
//! integration. Strategies never touch the registry table; the registry
//! walks them in the fixed order given by [`Strategy::ENTRY_POINT_CHAIN`]
//! and [`Strategy::MODULE_CHAIN`] and registers whatever they accept.

use std::fmt;
use std::sync::Arc;

use quack_domain::constants::{INTEGRATION_FACTORY_NAME, TEST_INTEGRATION_MEMBER};
use quack_domain::ports::Integration;
use quack_domain::value_objects::{EntryPoint, LoadedObject};
use tracing::debug;

use super::conformance::conform;
use super::report::CandidateError;
use crate::ports::PluginLoader;
use crate::ports::registry::{IntegrationModule, MemberConstructor};

/// A way of producing an integration from a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Delegate to the host's plugin loader
    PluginLoader,
    /// Call the entry point's own `load()` and invoke the returned factory
    EntryPointLoad,
    /// Invoke the module's `create_integration` factory
    Factory,
    /// Construct the module's test integration and registered members
    ModuleMembers,
}

impl Strategy {
    /// Order in which entry points are resolved
    pub const ENTRY_POINT_CHAIN: [Strategy; 2] = [Strategy::PluginLoader, Strategy::EntryPointLoad];

    /// Order in which modules are resolved
    pub const MODULE_CHAIN: [Strategy; 3] = [
        Strategy::PluginLoader,
        Strategy::Factory,
        Strategy::ModuleMembers,
    ];

    /// Short label used in logs
    pub fn label(self) -> &'static str {
        match self {
            Strategy::PluginLoader => "plugin_loader",
            Strategy::EntryPointLoad => "entry_point",
            Strategy::Factory => "factory",
            Strategy::ModuleMembers => "module_members",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

type Candidate = Result<Arc<dyn Integration>, CandidateError>;

/// Ask the plugin loader for `identifier` and check what it returns
pub(super) fn from_plugin_loader(loader: &dyn PluginLoader, identifier: &str) -> Candidate {
    let object = loader
        .load_plugin(identifier)
        .map_err(CandidateError::PluginLoader)?;
    conform(object)
}

/// Resolve one entry point through [`Strategy::ENTRY_POINT_CHAIN`]
///
/// A plugin loader failure only means that strategy produced nothing; the
/// error reported is the one from the last strategy tried.
pub(super) fn from_entry_point(entry: &EntryPoint, loader: Option<&dyn PluginLoader>) -> Candidate {
    let mut last_error = CandidateError::NotCallable;

    for strategy in Strategy::ENTRY_POINT_CHAIN {
        let candidate = match strategy {
            Strategy::PluginLoader => match loader {
                Some(loader) => from_plugin_loader(loader, &entry.value),
                None => continue,
            },
            _ => load_and_invoke(entry),
        };

        match candidate {
            Ok(integration) => return Ok(integration),
            Err(e) => {
                debug!(entry_point = %entry.name, strategy = %strategy, error = %e, "Strategy produced no integration");
                last_error = e;
            }
        }
    }

    Err(last_error)
}

fn load_and_invoke(entry: &EntryPoint) -> Candidate {
    match entry.load().map_err(CandidateError::Load)? {
        LoadedObject::Factory(factory) => conform(factory().map_err(CandidateError::Load)?),
        _ => Err(CandidateError::NotCallable),
    }
}

/// Invoke a zero-argument constructor and check its product
pub(super) fn invoke(constructor: &MemberConstructor) -> Candidate {
    conform(constructor().map_err(CandidateError::Load)?)
}

/// Candidate from the module's `create_integration` factory, if declared
pub(super) fn from_factory(module: &IntegrationModule) -> Option<(String, Candidate)> {
    module.factory().map(|factory| {
        (
            format!("{}::{}", module.path(), INTEGRATION_FACTORY_NAME),
            invoke(factory),
        )
    })
}

/// Candidates from the module's members, test integration first
pub(super) fn from_members(module: &IntegrationModule) -> Vec<(String, Candidate)> {
    let special = module
        .test_integration()
        .map(|ctor| (TEST_INTEGRATION_MEMBER, ctor));

    special
        .into_iter()
        .chain(module.members())
        .map(|(name, ctor)| (format!("{}::{}", module.path(), name), invoke(ctor)))
        .collect()
}
