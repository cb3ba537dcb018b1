//! CLI error type and its mapping to diagnostics and exit codes.
//!
//! Every failure that reaches `main` is a [`CliError`].  It knows which
//! [`ExitStatus`] the process should end with and how to print itself on
//! stderr, with hints taken from the wrapped core error when there is one.

use std::error::Error as _;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use stencil_core::error::{ErrorCategory, StencilError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// `stencil.toml`, `--config` or a `STENCIL_*` variable could not be used.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Loading or generating failed.
    #[error("Generation failed: {0}")]
    Core(#[from] StencilError),

    /// Writing to stdout or the config file failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Process exit codes.  `0` is success and never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Internal = 1,
    InvalidTemplate = 2,
    TemplateMissing = 3,
    Configuration = 4,
}

impl CliError {
    pub fn status(&self) -> ExitStatus {
        match self {
            Self::Config { .. } => ExitStatus::Configuration,
            Self::Io { .. } => ExitStatus::Internal,
            Self::Core(core) => match core.category() {
                ErrorCategory::Validation => ExitStatus::InvalidTemplate,
                ErrorCategory::NotFound => ExitStatus::TemplateMissing,
                ErrorCategory::Configuration => ExitStatus::Configuration,
                ErrorCategory::Internal => ExitStatus::Internal,
            },
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.status() as u8
    }

    /// What the user can do about it.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::Config { .. } => vec![
                "Check ./stencil.toml, the --config file and any STENCIL_* variables".into(),
                "`stencil init --force` rewrites ./stencil.toml with defaults".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io { .. } => vec!["Check that the target is writable".into()],
        }
    }

    /// Diagnostic text for stderr.  With `verbose` the source chain is
    /// listed; `color` switches ANSI styling on.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: String, styled: String| if color { styled } else { text };
        let mut out = String::new();

        let headline = format!("error: {self}");
        let _ = writeln!(out, "{}", paint(headline.clone(), headline.red().bold().to_string()));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let line = format!("  caused by: {err}");
                let _ = writeln!(out, "{}", paint(line.clone(), line.dimmed().to_string()));
                cause = err.source();
            }
        }

        for hint in self.hints() {
            let marker = paint("hint:".into(), "hint:".yellow().bold().to_string());
            let _ = writeln!(out, "  {marker} {hint}");
        }

        if !verbose {
            let _ = writeln!(out, "  (re-run with -v to see the underlying cause)");
        }

        out
    }

    /// Emit the failure as a tracing event.  Template problems are the
    /// user's to fix and log at `warn`; the rest at `error`.
    pub fn log(&self) {
        match self.status() {
            ExitStatus::InvalidTemplate | ExitStatus::TemplateMissing => {
                tracing::warn!(code = self.exit_code(), "{self}");
            }
            ExitStatus::Configuration | ExitStatus::Internal => {
                tracing::error!(code = self.exit_code(), "{self}");
            }
        }
    }
}

/// Attach a message to a failed `std::io` call.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::Io {
            message: f().into(),
            source,
        })
    }
}
