//! Application layer errors.
//!
//! These errors represent failures in collaborators and orchestration, not
//! business rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by stores and other driven adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Store access failed (lock poisoned, etc.).
    #[error("Store lock poisoned")]
    StoreLockError,

    /// A store rejected or failed an operation.
    #[error("Store operation failed: {reason}")]
    StoreFailure { reason: String },

    /// Reading or writing the backing file failed.
    #[error("Persistence error at {path}: {reason}")]
    Persistence { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreLockError => vec![
                "The store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::StoreFailure { reason } => vec![
                format!("The store reported: {}", reason),
                "Check the data file and retry".into(),
            ],
            Self::Persistence { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
                "Ensure the file contains a valid catalog document".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreLockError | Self::StoreFailure { .. } | Self::Persistence { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
