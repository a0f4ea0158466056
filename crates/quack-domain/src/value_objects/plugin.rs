//! Plugin loading value objects
//!
//! Discovery strategies never hand the registry a trusted integration
//! directly. They hand back a [`LoadedObject`], which may be an instance, a
//! callable factory, or something else entirely, and the registry decides
//! whether it conforms to the capability contract.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::ports::Integration;

/// Zero-argument constructor producing another loaded object
pub type IntegrationFactory = Arc<dyn Fn() -> Result<LoadedObject> + Send + Sync>;

/// Resolver behind an entry point's `load()`
pub type EntryPointLoader = Arc<dyn Fn() -> Result<LoadedObject> + Send + Sync>;

/// Result of resolving a plugin identifier, entry point or module member
#[derive(Clone)]
pub enum LoadedObject {
    /// A value implementing the capability contract
    Instance(Arc<dyn Integration>),
    /// A callable that has to be invoked to obtain the actual object
    Factory(IntegrationFactory),
    /// Any other value; only its type description survives
    Opaque {
        /// Human-readable description of the value's type
        type_name: String,
    },
}

impl LoadedObject {
    /// Wrap an integration instance
    pub fn instance<I: Integration>(integration: I) -> Self {
        Self::Instance(Arc::new(integration))
    }

    /// Wrap a zero-argument factory
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn() -> Result<LoadedObject> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(factory))
    }

    /// Describe a value that does not implement the contract
    pub fn opaque<S: Into<String>>(type_name: S) -> Self {
        Self::Opaque {
            type_name: type_name.into(),
        }
    }

    /// Describe an arbitrary value by its Rust type name
    pub fn of<T>(_value: &T) -> Self {
        Self::opaque(type_name::<T>())
    }

    /// Whether this object can be called to produce another object
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Factory(_))
    }

    /// Short description used in logs and discovery reports
    pub fn describe(&self) -> String {
        match self {
            Self::Instance(integration) => {
                format!("integration '{}' v{}", integration.name(), integration.version())
            }
            Self::Factory(_) => "factory".to_string(),
            Self::Opaque { type_name } => type_name.clone(),
        }
    }
}

impl fmt::Debug for LoadedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(integration) => f.debug_tuple("Instance").field(integration).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
            Self::Opaque { type_name } => f
                .debug_struct("Opaque")
                .field("type_name", type_name)
                .finish(),
        }
    }
}

/// Declared reference to an integration constructor
///
/// Mirrors a packaging entry point: a display `name`, a `value` that a
/// plugin loader can resolve on its own, and a `load()` that resolves the
/// reference directly.
#[derive(Clone)]
pub struct EntryPoint {
    /// Group the entry point is declared under
    pub group: String,
    /// Display identifier
    pub name: String,
    /// Resolvable reference (e.g., a module path)
    pub value: String,
    loader: EntryPointLoader,
}

impl EntryPoint {
    /// Create an entry point from its parts
    pub fn new<G, N, V, F>(group: G, name: N, value: V, loader: F) -> Self
    where
        G: Into<String>,
        N: Into<String>,
        V: Into<String>,
        F: Fn() -> Result<LoadedObject> + Send + Sync + 'static,
    {
        Self {
            group: group.into(),
            name: name.into(),
            value: value.into(),
            loader: Arc::new(loader),
        }
    }

    /// Resolve the referenced object
    pub fn load(&self) -> Result<LoadedObject> {
        (self.loader)()
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint")
            .field("group", &self.group)
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
