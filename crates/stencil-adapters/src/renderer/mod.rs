//! Artifact renderers.

mod react;

pub use react::ReactRenderer;
