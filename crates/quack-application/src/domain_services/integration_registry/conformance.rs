//! Capability contract check shared by every acceptance point

use std::sync::Arc;

use quack_domain::ports::Integration;
use quack_domain::value_objects::LoadedObject;

use super::report::CandidateError;

/// Accept `object` only if it is a usable integration instance
///
/// The trait guarantees `initialize` and `is_available` exist; what remains
/// to check is that the object is an instance at all and that it reports a
/// non-empty name and version.
pub fn conform(object: LoadedObject) -> Result<Arc<dyn Integration>, CandidateError> {
    match object {
        LoadedObject::Instance(integration) => {
            if integration.name().trim().is_empty() {
                return Err(non_conformant(
                    LoadedObject::Instance(integration),
                    "name is empty",
                ));
            }
            if integration.version().trim().is_empty() {
                return Err(non_conformant(
                    LoadedObject::Instance(integration),
                    "version is empty",
                ));
            }
            Ok(integration)
        }
        other @ LoadedObject::Factory(_) => {
            Err(non_conformant(other, "factory was not invoked to an instance"))
        }
        other @ LoadedObject::Opaque { .. } => {
            Err(non_conformant(other, "not an integration instance"))
        }
    }
}

fn non_conformant(object: LoadedObject, reason: &str) -> CandidateError {
    CandidateError::NonConformant {
        type_name: object.describe(),
        reason: reason.to_string(),
    }
}
