//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the generator, implemented by infrastructure
//!   - `Filesystem`: directory creation and file writes
//!   - `ArtifactRenderer`: descriptor → text for each artifact kind

pub mod output;

pub use output::{ArtifactRenderer, Filesystem};

#[cfg(test)]
pub use output::{MockArtifactRenderer, MockFilesystem};
