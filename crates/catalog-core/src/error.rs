//! Unified error handling for Catalog Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, Notification};

/// Root error type for Catalog Core operations.
///
/// Callers of the create/update use cases only ever observe
/// `Domain(Validation)` or `Domain(NotFound)`; `Application` errors surface
/// from reads and deletes, where store failures propagate as-is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// Errors from the domain layer (business rule violations, missing entities).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (store and adapter failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CatalogError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in the catalog tool".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The accumulated validation report, if this is a validation failure.
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Domain(e) => e.notification(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::NotFound { .. }))
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
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
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Extension trait for adding context to foreign errors.
pub trait Context<T> {
    /// Turn any error into [`CatalogError::Internal`] prefixed with `msg`.
    fn context(self, msg: impl Into<String>) -> CatalogResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CatalogResult<T> {
        self.map_err(|e| CatalogError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    #[test]
    fn validation_failure_exposes_its_notification() {
        let err: CatalogError = DomainError::validation(
            "Failed to validate aggregate Genre",
            Notification::from_error(ValidationError::new("'name' should not be null")),
        )
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        let notification = err.notification().unwrap();
        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message(),
            "'name' should not be null"
        );
    }

    #[test]
    fn not_found_is_categorised() {
        let err: CatalogError = DomainError::not_found("Genre", "123").into();
        assert!(err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "Genre with ID 123 was not found");
        assert!(err.notification().is_none());
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let result: Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result.context("Failed to render").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("Failed to render"));
    }

    #[test]
    fn lock_errors_are_retryable() {
        let err: CatalogError = ApplicationError::StoreLockError.into();
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
