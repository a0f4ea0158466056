use std::sync::Arc;

use quack_domain::error::Result;
use quack_domain::value_objects::LoadedObject;

/// External plugin loader
///
/// Hosts that manage plugins through their own mechanism expose it to the
/// integration registry through this trait. The registry tries the loader
/// before any of its own strategies; whatever the loader returns is still
/// checked for conformance, and any error it reports only means "this
/// strategy produced nothing".
pub trait PluginLoader: Send + Sync {
    /// Resolve an identifier (module path or entry-point value) to an object
    fn load_plugin(&self, identifier: &str) -> Result<LoadedObject>;
}

impl<L: PluginLoader + ?Sized> PluginLoader for Arc<L> {
    fn load_plugin(&self, identifier: &str) -> Result<LoadedObject> {
        (**self).load_plugin(identifier)
    }
}
