// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid sub-library name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid workspace configuration: {0}")]
    InvalidWorkspace(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate artifact path: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Pipeline Composition Errors
    // ========================================================================
    #[error("Pipeline '{pipeline}' has no steps")]
    EmptyPipeline { pipeline: String },

    #[error(
        "Pipeline '{pipeline}': step '{step}' consumes output '{binding}' \
         that no earlier step captured"
    )]
    UnboundStepOutput {
        pipeline: String,
        step: String,
        binding: String,
    },

    #[error("Pipeline '{pipeline}': duplicate output capture '{binding}'")]
    DuplicateStepOutput { pipeline: String, binding: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used as a sub-library name: {}", name, reason),
                "Names must be non-empty, lowercase, and safe as a path segment".into(),
                "Allowed characters: a-z, 0-9, '-', '_', '.'".into(),
            ],
            Self::InvalidWorkspace(msg) => vec![
                "Check your workspace configuration".into(),
                format!("Details: {}", msg),
            ],
            Self::UnboundStepOutput { step, binding, .. } => vec![
                format!("Step '{}' references '{}' before it is captured", step, binding),
                "Move the capture step earlier in the pipeline".into(),
            ],
            Self::EmptyPipeline { pipeline } => vec![
                format!("Pipeline '{}' was composed without steps", pipeline),
                "This is a composer bug, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidWorkspace(_)
            | Self::AbsolutePathNotAllowed { .. }
            | Self::DuplicatePath { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::EmptyPipeline { .. }
            | Self::UnboundStepOutput { .. }
            | Self::DuplicateStepOutput { .. } => ErrorCategory::Composition,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Composition,
    Internal,
}
