//! Integration Entry Point Registry
//!
//! Entry points are declared at compile time with
//! `#[linkme::distributed_slice(INTEGRATION_ENTRY_POINTS)]` and enumerated
//! by group at runtime. Hosts with another declaration mechanism implement
//! [`EntryPointSource`] themselves.

use quack_domain::error::Result;
use quack_domain::value_objects::{EntryPoint, LoadedObject};

/// Registry entry for integration entry points
///
/// # Example
///
/// ```ignore
/// #[linkme::distributed_slice(INTEGRATION_ENTRY_POINTS)]
/// static PANDOC_ENTRY: IntegrationEntryPointEntry = IntegrationEntryPointEntry {
///     group: "quackcore.integrations",
///     name: "pandoc",
///     value: "quack_pandoc::service",
///     load: || Ok(LoadedObject::factory(|| Ok(LoadedObject::instance(PandocIntegration::new())))),
/// };
/// ```
pub struct IntegrationEntryPointEntry {
    /// Group the entry point belongs to
    pub group: &'static str,
    /// Display identifier
    pub name: &'static str,
    /// Reference a plugin loader can resolve on its own
    pub value: &'static str,
    /// Resolve the reference directly
    pub load: fn() -> Result<LoadedObject>,
}

impl IntegrationEntryPointEntry {
    /// Convert the static declaration into a runtime descriptor
    pub fn to_entry_point(&self) -> EntryPoint {
        EntryPoint::new(self.group, self.name, self.value, self.load)
    }
}

// Auto-collection via linkme distributed slices - plugins submit entries at compile time
#[linkme::distributed_slice]
pub static INTEGRATION_ENTRY_POINTS: [IntegrationEntryPointEntry] = [..];

/// Enumerable collection of entry-point descriptors
pub trait EntryPointSource: Send + Sync {
    /// All descriptors declared under `group`
    fn entry_points(&self, group: &str) -> Result<Vec<EntryPoint>>;
}

/// Source backed by the compile-time [`INTEGRATION_ENTRY_POINTS`] slice
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisteredEntryPoints;

impl EntryPointSource for RegisteredEntryPoints {
    fn entry_points(&self, group: &str) -> Result<Vec<EntryPoint>> {
        Ok(INTEGRATION_ENTRY_POINTS
            .iter()
            .filter(|entry| entry.group == group)
            .map(IntegrationEntryPointEntry::to_entry_point)
            .collect())
    }
}

/// Source backed by an explicit list of descriptors
#[derive(Debug, Clone, Default)]
pub struct StaticEntryPoints {
    entries: Vec<EntryPoint>,
}

impl StaticEntryPoints {
    /// Create a source from descriptors
    pub fn new(entries: Vec<EntryPoint>) -> Self {
        Self { entries }
    }

    /// Add a descriptor
    pub fn with_entry(mut self, entry: EntryPoint) -> Self {
        self.entries.push(entry);
        self
    }
}

impl EntryPointSource for StaticEntryPoints {
    fn entry_points(&self, group: &str) -> Result<Vec<EntryPoint>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.group == group)
            .cloned()
            .collect())
    }
}

/// List all compile-time entry points as (group, name, value) tuples
pub fn list_entry_points() -> Vec<(&'static str, &'static str, &'static str)> {
    INTEGRATION_ENTRY_POINTS
        .iter()
        .map(|e| (e.group, e.name, e.value))
        .collect()
}
