//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed (permission denied, disk full, ...).
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file a step needs does not exist.
    #[error("File not found: {path}")]
    FileMissing { path: PathBuf },

    /// Reading the operator's confirmation failed.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::FileMissing { path } => vec![
                format!("Expected file at: {}", path.display()),
                "Run the command from the Laravel application root".into(),
                "Or point --app-root at the application directory".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Standard input could not be read".into(),
                "Use --yes or --force to run non-interactively".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::FileMissing { .. } => ErrorCategory::NotFound,
        }
    }
}
