//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ComponentDescriptor, Identifier};
use crate::error::StencilResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for artifact rendering.
///
/// One method per artifact kind. Implementations pick the textual dialect
/// (markup, type syntax) but must keep the four-file shape and refer to the
/// same identifier everywhere.
///
/// Implemented by:
/// - `stencil_adapters::renderer::ReactRenderer` (React + TypeScript + SCSS + Storybook)
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactRenderer: Send + Sync {
    /// Functional component whose parameters are the prop names.
    fn render_component_stub(
        &self,
        descriptor: &ComponentDescriptor,
        identifier: &Identifier,
    ) -> String;

    /// Props type declaration.
    fn render_type_definition(
        &self,
        descriptor: &ComponentDescriptor,
        identifier: &Identifier,
    ) -> String;

    /// Empty stylesheet rule scoped to the descriptor's class.
    fn render_style_stub(&self, descriptor: &ComponentDescriptor) -> String;

    /// Story file with one example invocation.
    fn render_story_stub(
        &self,
        descriptor: &ComponentDescriptor,
        identifier: &Identifier,
    ) -> String;
}
