//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`
//! and reads template files. It contains all I/O and the output dialect.

pub mod filesystem;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::ReactRenderer;
pub use template_loader::{JsonTemplateLoader, parse_template};
