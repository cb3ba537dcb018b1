//! Core domain layer for Stencil.
//!
//! Pure data and rules: component descriptors, identifier derivation and the
//! rendered artifact set. All I/O and the concrete output dialect live behind
//! ports defined in the application layer.
//!
//! - **No I/O**: no filesystem access
//! - **Immutable entities**: descriptors are never mutated after load
//! - **Only std + thiserror + serde** (serde for report serialization)

pub mod entities;
pub mod error;
pub mod identifier;

mod validation;

pub use entities::{
    Artifact, ArtifactKind, ArtifactSet, ComponentDescriptor, DescriptorBuilder, Prop, PropKind,
    Template,
};
pub use error::{DomainError, ErrorCategory};
pub use identifier::{Identifier, WORD_SEPARATOR};
pub use validation::DomainValidator;
