//! Unified error handling for Stencil Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with the offending component key and user-actionable suggestions.
//!
//! | Failure                          | Variant                                       |
//! |----------------------------------|-----------------------------------------------|
//! | Template missing/unreadable/bad  | `Application(TemplateNotFound / TemplateLoad / MalformedTemplate)` |
//! | Directory or file write failed   | `Application(FilesystemError)`                |
//! | Name → identifier failed         | `Domain(InvalidIdentifier)`                   |
//!
//! Anything raised while a specific descriptor is processed is wrapped in
//! [`StencilError::Component`] so diagnostics can name the key.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stencil Core operations.
#[derive(Debug, Error, Clone)]
pub enum StencilError {
    /// Errors from the domain layer (descriptor rules, derivation).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading, filesystem).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// An error raised while processing the component under `key`.
    #[error("component '{key}': {source}")]
    Component {
        key: String,
        #[source]
        source: Box<StencilError>,
    },
}

impl StencilError {
    /// Attach a template key. Already-keyed errors are returned unchanged.
    pub fn component(key: impl Into<String>, err: impl Into<StencilError>) -> Self {
        match err.into() {
            keyed @ Self::Component { .. } => keyed,
            other => Self::Component {
                key: key.into(),
                source: Box::new(other),
            },
        }
    }

    /// Template key of the component being processed, if any.
    pub fn component_key(&self) -> Option<&str> {
        match self {
            Self::Component { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The underlying error with any component wrapping removed.
    pub fn root(&self) -> &StencilError {
        match self {
            Self::Component { source, .. } => source.root(),
            other => other,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Component { key, source } => {
                let mut out = vec![format!("Fix the \"{key}\" entry in the template")];
                out.extend(source.suggestions());
                out
            }
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Component { source, .. } => source.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StencilResult<T> = Result<T, StencilError>;
