//! Generator - main application orchestrator.
//!
//! For every descriptor in a [`Template`]:
//! 1. Derive the identifier
//! 2. Render the four artifacts
//! 3. Ensure `<root>` and `<root>/<name>` exist
//! 4. Write (overwrite) the files
//!
//! A run validates every descriptor before the first write, then stops at the
//! first I/O failure. Files already written for earlier descriptors stay.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{ArtifactRenderer, Filesystem},
    domain::{
        ArtifactKind, ArtifactSet, ComponentDescriptor, DomainValidator as validator,
        Identifier, Template,
    },
    error::{StencilError, StencilResult},
};

/// Outcome of generating one descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComponent {
    pub key: String,
    pub identifier: Identifier,
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Summary of a full run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub output_root: PathBuf,
    pub components: Vec<GeneratedComponent>,
}

impl From<&ArtifactSet> for GeneratedComponent {
    /// The component that writing `set` would produce.
    fn from(set: &ArtifactSet) -> Self {
        Self {
            key: set.key().to_owned(),
            identifier: set.identifier().clone(),
            directory: set.directory().to_path_buf(),
            files: set.paths().collect(),
        }
    }
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.components.iter().map(|c| c.files.len()).sum()
    }
}

/// Component scaffolding service.
pub struct Generator {
    renderer: Box<dyn ArtifactRenderer>,
    filesystem: Box<dyn Filesystem>,
    output_root: PathBuf,
}

impl Generator {
    /// Create a generator writing below `output_root`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stencil_core::application::Generator;
    ///
    /// let generator = Generator::new(
    ///     renderer,     // impl ArtifactRenderer
    ///     filesystem,   // impl Filesystem
    ///     "components",
    /// );
    /// ```
    pub fn new(
        renderer: Box<dyn ArtifactRenderer>,
        filesystem: Box<dyn Filesystem>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Generate every descriptor in template order.
    #[instrument(
        skip_all,
        fields(
            components = template.len(),
            output_root = %self.output_root.display()
        )
    )]
    pub fn run(&self, template: &Template) -> StencilResult<GenerationReport> {
        info!("Generating {} component(s)", template.len());

        Self::preflight(template)?;

        let mut report = GenerationReport {
            output_root: self.output_root.clone(),
            components: Vec::with_capacity(template.len()),
        };
        for descriptor in template {
            let generated = self
                .generate_component_files(descriptor)
                .map_err(|e| StencilError::component(descriptor.key(), e))?;
            report.components.push(generated);
        }

        info!(files = report.file_count(), "Generation completed");
        Ok(report)
    }

    /// Render every descriptor without touching the filesystem.
    pub fn plan_all(&self, template: &Template) -> StencilResult<Vec<ArtifactSet>> {
        Self::preflight(template)?;
        template
            .iter()
            .map(|d| self.plan(d).map_err(|e| StencilError::component(d.key(), e)))
            .collect()
    }

    /// Render the four artifacts of one descriptor.
    pub fn plan(&self, descriptor: &ComponentDescriptor) -> StencilResult<ArtifactSet> {
        let identifier = descriptor.identifier()?;
        let directory = self.output_root.join(descriptor.name());

        let set = ArtifactSet::new(descriptor.key(), identifier.clone(), directory)
            .with_artifact(
                ArtifactKind::Component,
                self.renderer.render_component_stub(descriptor, &identifier),
            )
            .with_artifact(
                ArtifactKind::Model,
                self.renderer.render_type_definition(descriptor, &identifier),
            )
            .with_artifact(
                ArtifactKind::Style,
                self.renderer.render_style_stub(descriptor),
            )
            .with_artifact(
                ArtifactKind::Story,
                self.renderer.render_story_stub(descriptor, &identifier),
            );

        validator::validate_artifact_set(&set)?;
        Ok(set)
    }

    /// Write the artifact set of one descriptor.
    ///
    /// Creates at most two directories (the output root and the component
    /// directory) and writes four files, overwriting existing ones.
    #[instrument(skip_all, fields(key = %descriptor.key(), name = %descriptor.name()))]
    pub fn generate_component_files(
        &self,
        descriptor: &ComponentDescriptor,
    ) -> StencilResult<GeneratedComponent> {
        let set = self.plan(descriptor)?;

        self.ensure_directory(&self.output_root)?;
        self.ensure_directory(set.directory())?;

        let mut files = Vec::with_capacity(set.artifacts().len());
        for (artifact, path) in set.artifacts().iter().zip(set.paths()) {
            self.filesystem.write_file(&path, &artifact.content)?;
            debug!(path = %path.display(), bytes = artifact.size(), "Artifact written");
            files.push(path);
        }

        info!("Generated files for {}", set.identifier());

        Ok(GeneratedComponent {
            key: set.key().to_owned(),
            identifier: set.identifier().clone(),
            directory: set.directory().to_path_buf(),
            files,
        })
    }

    /// Create `path` (and parents) unless it already exists.
    pub fn ensure_directory(&self, path: &Path) -> StencilResult<()> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "Directory exists");
            return Ok(());
        }
        self.filesystem.create_dir_all(path)?;
        debug!(path = %path.display(), "Directory created");
        Ok(())
    }

    /// Validate every descriptor before anything is written.
    fn preflight(template: &Template) -> StencilResult<()> {
        for descriptor in template {
            validator::validate_descriptor(descriptor)
                .map_err(|e| StencilError::component(descriptor.key(), e))?;
        }
        if let Some((descriptor, err)) = template.find_duplicate_name() {
            return Err(StencilError::component(descriptor.key(), err));
        }
        debug!("Template validated");
        Ok(())
    }
}
