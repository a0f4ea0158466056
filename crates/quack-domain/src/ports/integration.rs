//! Integration capability contract
//!
//! The trait every pluggable integration implements, plus the downcast hook
//! registries use to recover concrete types.

use std::fmt;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::error::Result;

/// Capability contract for pluggable integrations
///
/// This is the only interface third-party integration authors implement.
/// Registries key integrations by [`name`](Integration::name) and hold them
/// as shared `Arc<dyn Integration>` references; they never mutate an
/// instance, so implementations that change state on `initialize` use
/// interior mutability.
///
/// # Example
///
/// ```
/// use quack_domain::error::Result;
/// use quack_domain::ports::Integration;
///
/// struct Pandoc;
///
/// impl Integration for Pandoc {
///     fn name(&self) -> &str { "pandoc" }
///     fn version(&self) -> &str { "0.3.0" }
///     fn initialize(&self) -> Result<()> { Ok(()) }
///     fn is_available(&self) -> bool { true }
/// }
/// ```
pub trait Integration: DowncastSync {
    /// Stable identifier used as the registry key
    fn name(&self) -> &str;

    /// Version string reported by the integration
    fn version(&self) -> &str;

    /// Prepare the integration for use
    fn initialize(&self) -> Result<()>;

    /// Whether the integration can currently serve requests
    fn is_available(&self) -> bool;
}

impl_downcast!(sync Integration);

impl fmt::Debug for dyn Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Integration")
            .field("name", &self.name())
            .field("version", &self.version())
            .finish()
    }
}
