//! Tests for entry-point discovery

use quack_application::ports::registry::{
    INTEGRATION_ENTRY_POINTS, IntegrationEntryPointEntry, StaticEntryPoints, list_entry_points,
};
use quack_application::{CandidateError, IntegrationRegistry};
use quack_domain::constants::INTEGRATION_ENTRY_POINT_GROUP;
use quack_domain::error::Error;
use quack_domain::value_objects::{EntryPoint, LoadedObject};

use crate::fixtures::{BrokenSource, Converter, Fixture, TableLoader, factory_entry};

// ============================================================================
// Entry point declared in this test binary
// ============================================================================

#[linkme::distributed_slice(INTEGRATION_ENTRY_POINTS)]
static SLICE_FIXTURE_ENTRY: IntegrationEntryPointEntry = IntegrationEntryPointEntry {
    group: INTEGRATION_ENTRY_POINT_GROUP,
    name: "slice_fixture",
    value: "unit.fixtures.slice_fixture",
    load: || {
        Ok(LoadedObject::factory(|| {
            Ok(LoadedObject::instance(Fixture::new("slice_fixture")))
        }))
    },
};

#[linkme::distributed_slice(INTEGRATION_ENTRY_POINTS)]
static OTHER_GROUP_ENTRY: IntegrationEntryPointEntry = IntegrationEntryPointEntry {
    group: "someone.else",
    name: "foreign",
    value: "unit.fixtures.foreign",
    load: || Ok(LoadedObject::opaque("foreign")),
};

fn group_entry<F>(name: &str, loader: F) -> EntryPoint
where
    F: Fn() -> quack_domain::Result<LoadedObject> + Send + Sync + 'static,
{
    EntryPoint::new(
        INTEGRATION_ENTRY_POINT_GROUP,
        name,
        format!("fixtures.{name}"),
        loader,
    )
}

#[test]
fn test_discovery_registers_only_conformant_candidates() {
    let source = StaticEntryPoints::default()
        .with_entry(factory_entry("pandoc"))
        .with_entry(group_entry("bogus", || {
            Ok(LoadedObject::factory(|| Ok(LoadedObject::opaque("alloc::string::String"))))
        }))
        .with_entry(group_entry("broken", || {
            Err(Error::module_load("fixtures.broken", "import failed"))
        }));
    let mut registry = IntegrationRegistry::new().with_entry_points(source);

    let report = registry.discover();

    assert_eq!(report.names(), vec!["pandoc"]);
    assert_eq!(registry.list_names(), vec!["pandoc"]);
    assert_eq!(report.failures.len(), 2);

    let bogus = report.failures.iter().find(|(c, _)| c == "bogus").unwrap();
    assert!(matches!(bogus.1, CandidateError::NonConformant { .. }));
    let broken = report.failures.iter().find(|(c, _)| c == "broken").unwrap();
    assert!(matches!(broken.1, CandidateError::Load(Error::ModuleLoad { .. })));
}

#[test]
fn test_non_callable_entry_point_is_reported() {
    let source = StaticEntryPoints::default().with_entry(group_entry("instance", || {
        Ok(LoadedObject::instance(Converter))
    }));
    let mut registry = IntegrationRegistry::new().with_entry_points(source);

    let report = registry.discover();

    assert!(report.is_empty());
    assert!(matches!(report.failures[0].1, CandidateError::NotCallable));
    assert!(registry.is_empty());
}

#[test]
fn test_failing_factory_call_is_reported() {
    let source = StaticEntryPoints::default().with_entry(group_entry("explodes", || {
        Ok(LoadedObject::factory(|| Err(Error::invalid_argument("missing binary"))))
    }));
    let mut registry = IntegrationRegistry::new().with_entry_points(source);

    let report = registry.discover();

    assert!(report.is_empty());
    assert!(matches!(
        report.failures[0].1,
        CandidateError::Load(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_second_discovery_reports_duplicates() {
    let source = StaticEntryPoints::default()
        .with_entry(factory_entry("pandoc"))
        .with_entry(factory_entry("github"));
    let mut registry = IntegrationRegistry::new().with_entry_points(source);

    let first = registry.discover();
    assert_eq!(first.len(), 2);
    assert!(!first.has_failures());

    let second = registry.discover();
    assert!(second.is_empty());
    assert_eq!(second.failures.len(), 2);
    assert!(second.failures.iter().all(|(_, e)| e.is_duplicate_name()));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_plugin_loader_is_preferred_for_entry_points() {
    let loader = TableLoader::default().with_plugin("fixtures.pandoc", || {
        LoadedObject::instance(Fixture::versioned("pandoc", "9.9.9"))
    });
    let source = StaticEntryPoints::default().with_entry(factory_entry("pandoc"));
    let mut registry = IntegrationRegistry::new()
        .with_entry_points(source)
        .with_plugin_loader(loader);

    let report = registry.discover();

    assert_eq!(report.names(), vec!["pandoc"]);
    assert_eq!(registry.get("pandoc").unwrap().version(), "9.9.9");
}

#[test]
fn test_plugin_loader_failure_falls_back_to_entry_point_load() {
    let source = StaticEntryPoints::default().with_entry(factory_entry("github"));
    let mut registry = IntegrationRegistry::new()
        .with_entry_points(source)
        .with_plugin_loader(TableLoader::default());

    let report = registry.discover();

    assert_eq!(report.names(), vec!["github"]);
    assert_eq!(registry.get("github").unwrap().version(), "1.0.0");
}

#[test]
fn test_unavailable_entry_point_source_yields_empty_report() {
    let mut registry = IntegrationRegistry::new().with_entry_points(BrokenSource);

    let report = registry.discover();

    assert!(report.is_empty());
    assert!(!report.has_failures());
    assert!(registry.is_empty());
}

#[test]
fn test_default_source_reads_linked_entry_points() {
    let declared = list_entry_points();
    assert!(declared.iter().any(|(_, name, _)| *name == "slice_fixture"));
    assert!(declared.iter().any(|(group, _, _)| *group == "someone.else"));

    let mut registry = IntegrationRegistry::new();
    let report = registry.discover();

    assert!(registry.is_registered("slice_fixture"));
    assert!(!registry.is_registered("foreign"));
    assert!(
        report
            .failures
            .iter()
            .all(|(candidate, _)| candidate != "foreign")
    );
}

#[test]
fn test_builtin_llm_entry_point_is_discovered() {
    let mut registry = IntegrationRegistry::new();
    registry.discover();

    let llm = registry.get("LLM").expect("LLM facade should be discovered");
    assert_eq!(llm.version(), "1.0.0");
    assert!(!llm.is_available());
}
