//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold UI components from a JSON template",
    long_about = "Stencil reads template.json and writes, for every component, \
                  a component stub, a props type, a stylesheet and a story \
                  into components/<name>/.",
    after_help = "EXAMPLES:\n\
        \x20 stencil                                  # template.json -> components/\n\
        \x20 stencil generate --template ui.json --output src/components\n\
        \x20 stencil generate --dry-run\n\
        \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil",
)]
pub struct Cli {
    /// Flags available everywhere.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, defaulting to `generate` with no overrides.
    pub fn command_or_default(&mut self) -> Commands {
        self.command
            .take()
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate component files from the template (the default).
    #[command(
        visible_alias = "gen",
        about = "Generate component files",
        after_help = "EXAMPLES:\n\
            \x20 stencil generate\n\
            \x20 stencil generate --template design/template.json\n\
            \x20 stencil generate --output src/components --dry-run"
    )]
    Generate(GenerateArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init           # ./stencil.toml\n\
            \x20 stencil init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),
}

impl Commands {
    /// Whether the command needs [`crate::config::AppConfig`] loaded first.
    pub fn reads_config(&self) -> bool {
        matches!(self, Self::Generate(_))
    }
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `stencil generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Template file (overrides the configured `template`).
    #[arg(
        short = 't',
        long = "template",
        value_name = "FILE",
        help = "Template file [default: template.json]"
    )]
    pub template: Option<PathBuf>,

    /// Output root (overrides the configured `output_dir`).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory [default: components]"
    )]
    pub output: Option<PathBuf>,

    /// Render everything but write nothing.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long = "force", help = "Overwrite existing config")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
