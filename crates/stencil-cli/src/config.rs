//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. `STENCIL_*` environment variables (`STENCIL_OUTPUT__NO_COLOR=true`)
//! 3. Config file: `--config FILE`, else `./stencil.toml` over the user file
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "stencil.toml";

const ENV_PREFIX: &str = "STENCIL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template file read by `generate`.
    pub template: PathBuf,
    /// Root directory that receives one folder per component.
    pub output_dir: PathBuf,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("template.json"),
            output_dir: PathBuf::from("components"),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the environment over defaults.
    ///
    /// `config_file` is the path given with `--config`; when present it must
    /// exist and replaces the implicit file lookup.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_with(
            config_file.map(PathBuf::as_path),
            Path::new(LOCAL_CONFIG_FILE),
            Self::user_config_path().as_deref(),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn load_with(
        explicit: Option<&Path>,
        local: &Path,
        user: Option<&Path>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match explicit {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
            }
            None => {
                if let Some(user) = user {
                    builder =
                        builder.add_source(File::from(user).format(FileFormat::Toml).required(false));
                }
                builder =
                    builder.add_source(File::from(local).format(FileFormat::Toml).required(false));
            }
        }

        let settings = builder
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        settings
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Per-user configuration file, if the platform has a config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
