use crate::domain::{
    entities::{ArtifactSet, ComponentDescriptor},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_descriptor(descriptor: &ComponentDescriptor) -> Result<(), DomainError> {
        descriptor.validate()
    }

    pub fn validate_artifact_set(set: &ArtifactSet) -> Result<(), DomainError> {
        set.validate()
    }
}
