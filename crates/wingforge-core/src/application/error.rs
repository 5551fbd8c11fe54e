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
    /// Filesystem operation failed during a write-always artifact.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Shared adapter state access failed (lock poisoned, etc.).
    #[error("Shared state lock poisoned")]
    LockPoisoned,

    /// Pipeline registration was refused by the integration point.
    #[error("Failed to register pipeline '{pipeline}': {reason}")]
    RegistrationFailed { pipeline: String, reason: String },

    /// Rendering a pipeline definition to its wire format failed.
    #[error("Failed to render pipeline '{pipeline}': {reason}")]
    RenderingFailed { pipeline: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "A partially written workspace is unsafe; re-run after fixing the cause".into(),
            ],
            Self::LockPoisoned => vec![
                "A shared adapter lock was poisoned by an earlier panic".into(),
                "Try again in a moment".into(),
            ],
            Self::RegistrationFailed { pipeline, .. } => vec![
                format!("The CI integration point rejected '{}'", pipeline),
            ],
            Self::RenderingFailed { .. } => vec![
                "This is likely a composer bug, please report it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::LockPoisoned => ErrorCategory::Internal,
            Self::RegistrationFailed { .. } => ErrorCategory::Internal,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
