// ============================================================================
// domain/error.rs - DESCRIPTOR & DERIVATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so they can be wrapped with the offending component key)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// None of these carry the template key themselves; the generator attaches
/// it through [`crate::error::StencilError::Component`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Derivation Errors
    // ========================================================================
    #[error("cannot derive an identifier from name '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    // ========================================================================
    // Descriptor Validation Errors
    // ========================================================================
    #[error("required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("invalid class name '{class}': {reason}")]
    InvalidClass { class: String, reason: String },

    #[error("invalid prop '{prop}': {reason}")]
    InvalidProp { prop: String, reason: String },

    #[error("prop '{prop}' is declared more than once")]
    DuplicateProp { prop: String },

    #[error("component name '{name}' is used by more than one descriptor")]
    DuplicateComponentName { name: String },

    // ========================================================================
    // Artifact Set Invariants
    // ========================================================================
    #[error("artifact set for '{identifier}' is incomplete: {reason}")]
    IncompleteArtifactSet { identifier: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidIdentifier { name, .. } => vec![
                format!("'{name}' must be a kebab-case name such as 'custom-card'"),
                "Use ASCII letters, digits and '_' separated by '-'".into(),
                "The first letter must not be a digit".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add a \"{field}\" entry to the component"),
                "Every component needs \"name\", \"class\" and \"props\"".into(),
            ],
            Self::InvalidClass { class, .. } => vec![
                format!("'{class}' is used verbatim as a CSS selector"),
                "Use letters, digits, '-' and '_' (no leading '.')".into(),
            ],
            Self::InvalidProp { .. } => vec![
                "Prop names must be valid TypeScript identifiers".into(),
                "Mark optional props with a trailing '?', e.g. \"subtitle?\"".into(),
                "Prop types are a type name (\"string\") or a list of literals ([\"a\", \"b\"])"
                    .into(),
            ],
            Self::DuplicateProp { prop } => vec![
                format!("Remove one of the '{prop}' entries"),
                "'name' and 'name?' refer to the same prop".into(),
            ],
            Self::DuplicateComponentName { name } => vec![
                format!("Two components would both be written to components/{name}/"),
                "Give each component a unique \"name\"".into(),
            ],
            Self::IncompleteArtifactSet { .. } => {
                vec!["This is a bug in the renderer, please report it".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncompleteArtifactSet { .. } => ErrorCategory::Internal,
            Self::MissingRequiredField { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    /// The template entry is structurally incomplete.
    Configuration,
    Internal,
}
