//! Implementation of `stencil generate` (also the default command).
//!
//! Responsibility: resolve the template path and output root from flags and
//! config, load the template, run the generator, and display results.  No
//! generation logic lives here.

use std::path::PathBuf;

use tracing::{debug, instrument};

use stencil_adapters::{JsonTemplateLoader, LocalFilesystem, ReactRenderer};
use stencil_core::application::{GeneratedComponent, GenerationReport, Generator};

use crate::{cli::GenerateArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Execute `stencil generate`.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (template_path, output_root) = resolve_paths(&args, &config);
    debug!(
        template = %template_path.display(),
        output = %output_root.display(),
        format = ?output.format(),
        "Paths resolved"
    );

    let template = JsonTemplateLoader::new(&template_path).load()?;
    if template.is_empty() {
        output.warning(&format!(
            "{} declares no components; nothing to do",
            template_path.display()
        ))?;
    }

    let generator = Generator::new(
        Box::new(ReactRenderer::new()),
        Box::new(LocalFilesystem::new()),
        output_root,
    );

    if args.dry_run {
        let report = GenerationReport {
            output_root: generator.output_root().to_path_buf(),
            components: generator
                .plan_all(&template)?
                .iter()
                .map(GeneratedComponent::from)
                .collect(),
        };
        output.header("Dry run: no files written")?;
        show_report(&report, &output)?;
        return output.json(&report).map_err(Into::into);
    }

    let report = generator.run(&template)?;
    show_report(&report, &output)?;
    output.success(&format!(
        "{} component(s), {} file(s) in {}",
        report.components.len(),
        report.file_count(),
        report.output_root.display(),
    ))?;
    output.json(&report)?;

    Ok(())
}

/// Flags win over configuration.
fn resolve_paths(args: &GenerateArgs, config: &AppConfig) -> (PathBuf, PathBuf) {
    (
        args.template.clone().unwrap_or_else(|| config.template.clone()),
        args.output.clone().unwrap_or_else(|| config.output_dir.clone()),
    )
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for component in &report.components {
        output.info(&format!(
            "{} ({}) -> {}",
            component.identifier,
            component.key,
            component.directory.display()
        ))?;
        for file in &component.files {
            output.print(&format!("    {}", file.display()))?;
        }
    }
    Ok(())
}
