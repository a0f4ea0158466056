//! Integration Module Registry
//!
//! An integration module is a resolvable unit identified by a path string.
//! Modules declare their contents themselves: during initialization they
//! receive a [`ModuleBuilder`] and register an optional
//! `create_integration` factory, an optional test integration and any
//! number of named member constructors. Nothing is found by scanning.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use quack_domain::constants::{INTEGRATION_FACTORY_NAME, TEST_INTEGRATION_MEMBER};
use quack_domain::error::{Error, Result};
use quack_domain::value_objects::{IntegrationFactory, LoadedObject};
use tracing::debug;

/// Zero-argument constructor for a module member
pub type MemberConstructor = Arc<dyn Fn() -> Result<LoadedObject> + Send + Sync>;

type ModuleInit = Arc<dyn Fn(&mut ModuleBuilder) + Send + Sync>;

/// Registry entry for integration modules
///
/// # Example
///
/// ```ignore
/// #[linkme::distributed_slice(INTEGRATION_MODULES)]
/// static PANDOC_MODULE: IntegrationModuleEntry = IntegrationModuleEntry {
///     path: "quack_pandoc",
///     description: "Document conversion through pandoc",
///     init: |module| {
///         module.factory(|| Ok(LoadedObject::instance(PandocIntegration::new())));
///     },
/// };
/// ```
pub struct IntegrationModuleEntry {
    /// Identifier the module is resolved by
    pub path: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Declares the module's contents
    pub init: fn(&mut ModuleBuilder),
}

// Auto-collection via linkme distributed slices - modules submit entries at compile time
#[linkme::distributed_slice]
pub static INTEGRATION_MODULES: [IntegrationModuleEntry] = [..];

/// Collects the declarations a module makes while initializing
pub struct ModuleBuilder {
    path: String,
    factory: Option<IntegrationFactory>,
    test_integration: Option<MemberConstructor>,
    members: Vec<(String, MemberConstructor)>,
}

impl ModuleBuilder {
    /// Start declaring the module at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            factory: None,
            test_integration: None,
            members: Vec::new(),
        }
    }

    /// Declare the module's `create_integration` factory
    pub fn factory<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn() -> Result<LoadedObject> + Send + Sync + 'static,
    {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Declare the special test integration, tried before other members
    pub fn test_integration<F>(&mut self, constructor: F) -> &mut Self
    where
        F: Fn() -> Result<LoadedObject> + Send + Sync + 'static,
    {
        self.test_integration = Some(Arc::new(constructor));
        self
    }

    /// Declare a named member constructor
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn() -> Result<LoadedObject> + Send + Sync + 'static,
    {
        self.members.push((name.into(), Arc::new(constructor)));
        self
    }

    /// Finish the declaration
    pub fn build(self) -> IntegrationModule {
        IntegrationModule {
            path: self.path,
            factory: self.factory,
            test_integration: self.test_integration,
            members: self.members,
        }
    }
}

/// A resolved integration module
pub struct IntegrationModule {
    path: String,
    factory: Option<IntegrationFactory>,
    test_integration: Option<MemberConstructor>,
    members: Vec<(String, MemberConstructor)>,
}

impl IntegrationModule {
    /// Identifier the module was resolved by
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The declared `create_integration` factory, if any
    pub fn factory(&self) -> Option<&IntegrationFactory> {
        self.factory.as_ref()
    }

    /// The declared test integration constructor, if any
    pub fn test_integration(&self) -> Option<&MemberConstructor> {
        self.test_integration.as_ref()
    }

    /// Named member constructors in declaration order
    pub fn members(&self) -> impl Iterator<Item = (&str, &MemberConstructor)> {
        self.members.iter().map(|(name, ctor)| (name.as_str(), ctor))
    }

    /// Names the module exposes, factory and test integration included
    pub fn member_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.members.len() + 2);
        if self.factory.is_some() {
            names.push(INTEGRATION_FACTORY_NAME.to_string());
        }
        if self.test_integration.is_some() {
            names.push(TEST_INTEGRATION_MEMBER.to_string());
        }
        names.extend(self.members.iter().map(|(name, _)| name.clone()));
        names
    }
}

impl fmt::Debug for IntegrationModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationModule")
            .field("path", &self.path)
            .field("members", &self.member_names())
            .finish()
    }
}

/// Resolves module identifiers to modules
pub trait ModuleResolver: Send + Sync {
    /// Resolve `identifier`, failing with [`Error::ModuleLoad`] if unknown
    fn resolve(&self, identifier: &str) -> Result<Arc<IntegrationModule>>;
}

/// Default resolver over [`INTEGRATION_MODULES`] plus runtime definitions
///
/// A module is initialized the first time it is resolved; later
/// resolutions return the cached module.
pub struct ModuleCatalog {
    definitions: HashMap<String, ModuleInit>,
    loaded: Mutex<HashMap<String, Arc<IntegrationModule>>>,
}

impl ModuleCatalog {
    /// Catalog of every module declared in [`INTEGRATION_MODULES`]
    pub fn new() -> Self {
        let mut catalog = Self::empty();
        for entry in INTEGRATION_MODULES {
            let init = entry.init;
            catalog
                .definitions
                .insert(entry.path.to_string(), Arc::new(move |m: &mut ModuleBuilder| init(m)));
        }
        catalog
    }

    /// Catalog without any declared modules
    pub fn empty() -> Self {
        Self {
            definitions: HashMap::new(),
            loaded: Mutex::new(HashMap::new()),
        }
    }

    /// Add (or replace) a module definition
    pub fn with_module<F>(mut self, path: impl Into<String>, init: F) -> Self
    where
        F: Fn(&mut ModuleBuilder) + Send + Sync + 'static,
    {
        self.definitions.insert(path.into(), Arc::new(init));
        self
    }

    /// Known module paths, sorted
    pub fn module_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.definitions.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Whether `identifier` has already been initialized
    pub fn is_loaded(&self, identifier: &str) -> bool {
        self.loaded
            .lock()
            .map(|loaded| loaded.contains_key(identifier))
            .unwrap_or(false)
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ModuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleCatalog")
            .field("modules", &self.module_paths())
            .finish_non_exhaustive()
    }
}

impl ModuleResolver for ModuleCatalog {
    fn resolve(&self, identifier: &str) -> Result<Arc<IntegrationModule>> {
        let mut loaded = self
            .loaded
            .lock()
            .map_err(|_| Error::internal("module cache lock poisoned"))?;

        if let Some(module) = loaded.get(identifier) {
            return Ok(Arc::clone(module));
        }

        let init = self
            .definitions
            .get(identifier)
            .ok_or_else(|| Error::module_load(identifier, "no module is declared at this path"))?;

        let mut builder = ModuleBuilder::new(identifier);
        init(&mut builder);
        let module = Arc::new(builder.build());
        debug!(module = %identifier, members = ?module.member_names(), "Initialized integration module");

        loaded.insert(identifier.to_string(), Arc::clone(&module));
        Ok(module)
    }
}

impl<R: ModuleResolver + ?Sized> ModuleResolver for Arc<R> {
    fn resolve(&self, identifier: &str) -> Result<Arc<IntegrationModule>> {
        (**self).resolve(identifier)
    }
}

/// List all compile-time modules as (path, description) tuples
pub fn list_integration_modules() -> Vec<(&'static str, &'static str)> {
    INTEGRATION_MODULES
        .iter()
        .map(|e| (e.path, e.description))
        .collect()
}
