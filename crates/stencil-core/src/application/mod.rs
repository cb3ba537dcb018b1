//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`Generator`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Descriptor rules live in `crate::domain`; this layer only coordinates.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GeneratedComponent, GenerationReport, Generator};

pub use ports::{ArtifactRenderer, Filesystem};

pub use error::ApplicationError;
