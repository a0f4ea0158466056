//! Shared test doubles for the registry tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use quack_application::ports::PluginLoader;
use quack_application::ports::registry::EntryPointSource;
use quack_domain::error::{Error, Result};
use quack_domain::ports::Integration;
use quack_domain::value_objects::{EntryPoint, LoadedObject};

/// Integration whose name and version are chosen by the test
pub struct Fixture {
    name: String,
    version: String,
    ready: AtomicBool,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        Self::versioned(name, "1.0.0")
    }

    pub fn versioned(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            ready: AtomicBool::new(false),
        }
    }
}

impl Integration for Fixture {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn initialize(&self) -> Result<()> {
        self.ready.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

/// A second concrete integration type for type filtering
pub struct Converter;

impl Integration for Converter {
    fn name(&self) -> &str {
        "converter"
    }

    fn version(&self) -> &str {
        "0.2.0"
    }

    fn initialize(&self) -> Result<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Entry point whose `load()` returns a factory building `Fixture::new(name)`
pub fn factory_entry(name: &'static str) -> EntryPoint {
    EntryPoint::new(
        quack_domain::constants::INTEGRATION_ENTRY_POINT_GROUP,
        name,
        format!("fixtures.{name}"),
        move || {
            Ok(LoadedObject::factory(move || {
                Ok(LoadedObject::instance(Fixture::new(name)))
            }))
        },
    )
}

/// Plugin loader answering from a fixed table and recording every request
#[derive(Default)]
pub struct TableLoader {
    plugins: HashMap<String, fn() -> LoadedObject>,
    pub requests: Mutex<Vec<String>>,
}

impl TableLoader {
    pub fn with_plugin(mut self, identifier: &str, plugin: fn() -> LoadedObject) -> Self {
        self.plugins.insert(identifier.to_string(), plugin);
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PluginLoader for TableLoader {
    fn load_plugin(&self, identifier: &str) -> Result<LoadedObject> {
        self.requests.lock().unwrap().push(identifier.to_string());
        self.plugins
            .get(identifier)
            .map(|plugin| plugin())
            .ok_or_else(|| Error::module_load(identifier, "no such plugin"))
    }
}

/// Entry-point source that cannot enumerate anything
pub struct BrokenSource;

impl EntryPointSource for BrokenSource {
    fn entry_points(&self, _group: &str) -> Result<Vec<EntryPoint>> {
        Err(Error::io("package metadata unavailable"))
    }
}
