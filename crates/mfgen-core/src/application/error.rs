//! Application layer errors.
//!
//! These errors represent failures in orchestration, not configuration
//! validation. Validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The renderer was asked for a template id outside the catalog.
    /// A defect in the catalog wiring, fatal.
    #[error("unknown template id '{id}'")]
    UnknownTemplate { id: String },

    /// A template requires a context variable that was not supplied.
    /// A defect in the catalog wiring, fatal.
    #[error("template '{template}' requires variable '{variable}' which is missing from the context")]
    MissingVariable {
        template: String,
        variable: &'static str,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The target directory already exists and is not empty.
    #[error("target directory already exists and is not empty: {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplate { id } => vec![
                format!("Template '{id}' is not in the built-in catalog"),
                "This is a defect in mfgen, please report it".into(),
            ],
            Self::MissingVariable { template, variable } => vec![
                format!("Template '{template}' was rendered without '{variable}'"),
                "This is a defect in mfgen, please report it".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "The partial tree is left in place for inspection; delete it before retrying".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different application name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate { .. } | Self::MissingVariable { .. } => ErrorCategory::Internal,
            Self::Filesystem { .. } => ErrorCategory::Filesystem,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}
