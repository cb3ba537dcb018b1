//! Application layer errors.
//!
//! These errors represent failures in loading and writing, not descriptor
//! rules. Descriptor rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading a template or materializing artifacts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template file does not exist.
    #[error("Template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Template file exists but could not be read or parsed.
    #[error("Failed to load template {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    /// Template content is not a valid component mapping.
    #[error("Malformed template: {reason}")]
    MalformedTemplate { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state lock was poisoned.
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path } => vec![
                format!("No template at {}", path.display()),
                "Create a template.json in the current directory".into(),
                "Or pass one explicitly: stencil generate --template path/to/template.json".into(),
            ],
            Self::TemplateLoad { path, .. } => vec![
                format!("Check that {} is readable and valid JSON", path.display()),
                "The top level must be an object of component entries".into(),
            ],
            Self::MalformedTemplate { .. } => vec![
                "Each entry needs \"name\", \"class\" and \"props\"".into(),
                "Example: {\"card\": {\"name\": \"custom-card\", \"class\": \"card-base\", \"props\": {\"title\": \"string\"}}}".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::TemplateLoad { .. } | Self::MalformedTemplate { .. } => {
                ErrorCategory::Configuration
            }
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
