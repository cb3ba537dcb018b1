use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, identifier::Identifier};

/// The four files produced for every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Functional component stub.
    Component,
    /// Props type declaration.
    Model,
    /// Stylesheet stub.
    Style,
    /// Story / example usage.
    Story,
}

impl ArtifactKind {
    /// Write order within a component directory.
    pub const ALL: [ArtifactKind; 4] = [Self::Component, Self::Model, Self::Style, Self::Story];

    /// File name inside the component directory.
    pub fn file_name(self, identifier: &Identifier) -> String {
        match self {
            Self::Component => "index.tsx".into(),
            Self::Model => "model.ts".into(),
            Self::Style => "style.scss".into(),
            Self::Story => format!("{identifier}.stories.tsx"),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::Model => write!(f, "model"),
            Self::Style => write!(f, "style"),
            Self::Story => write!(f, "story"),
        }
    }
}

/// One rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub content: String,
}

impl Artifact {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Rendered artifacts for one descriptor, ready for materialization.
///
/// This is the output of rendering and contains no I/O, only data.
#[derive(Debug, Clone)]
pub struct ArtifactSet {
    pub(crate) key: String,
    pub(crate) identifier: Identifier,
    pub(crate) directory: PathBuf,
    pub(crate) artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new(key: impl Into<String>, identifier: Identifier, directory: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            identifier,
            directory: directory.into(),
            artifacts: Vec::with_capacity(ArtifactKind::ALL.len()),
        }
    }

    pub fn add(&mut self, kind: ArtifactKind, content: String) {
        let file_name = kind.file_name(&self.identifier);
        self.artifacts.push(Artifact {
            kind,
            file_name,
            content,
        });
    }

    pub fn with_artifact(mut self, kind: ArtifactKind, content: String) -> Self {
        self.add(kind, content);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Absolute or root-relative path of every artifact, in write order.
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.artifacts
            .iter()
            .map(|a| self.directory.join(&a.file_name))
    }

    /// Exactly one artifact of each kind, unique file names.
    pub fn validate(&self) -> Result<(), DomainError> {
        let incomplete = |reason: String| DomainError::IncompleteArtifactSet {
            identifier: self.identifier.to_string(),
            reason,
        };

        let mut kinds = HashSet::new();
        let mut names = HashSet::new();
        for artifact in &self.artifacts {
            if !kinds.insert(artifact.kind) {
                return Err(incomplete(format!("{} rendered twice", artifact.kind)));
            }
            if !names.insert(artifact.file_name.as_str()) {
                return Err(incomplete(format!("duplicate file {}", artifact.file_name)));
            }
        }

        if let Some(missing) = ArtifactKind::ALL.iter().find(|k| !kinds.contains(*k)) {
            return Err(incomplete(format!("{missing} is missing")));
        }

        Ok(())
    }
}
