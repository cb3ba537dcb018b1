pub mod artifact;
pub mod descriptor;
pub mod template;

pub use crate::domain::DomainError;
pub use artifact::{Artifact, ArtifactKind, ArtifactSet};
pub use descriptor::{ComponentDescriptor, DescriptorBuilder, Prop, PropKind};
pub use template::Template;
