use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retry with corrected input)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntityName { name, reason } => vec![
                format!("'{}' is not a valid model name: {}", name, reason),
                "Use letters, digits and underscores; start with a letter".into(),
                "Examples: Order, UserProfile, invoice_line".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntityName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
