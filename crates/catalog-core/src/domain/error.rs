// ============================================================================
// domain/error.rs - DOMAIN FAILURES
// ============================================================================

use thiserror::Error;

use crate::domain::validation::Notification;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic and test doubles)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (422-level equivalent)
    // ========================================================================
    /// One or more rule violations, always reported together.
    ///
    /// The notification carries the full ordered list; it is never split
    /// into several failures.
    #[error("{message}: {notification}")]
    Validation {
        message: String,
        notification: Notification,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("{entity} with ID {id} was not found")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>, notification: Notification) -> Self {
        Self::Validation {
            message: message.into(),
            notification,
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// The accumulated report behind a validation failure.
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Validation { notification, .. } => Some(notification),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { notification, .. } => {
                let mut suggestions = vec!["Fix the following problems and retry:".to_string()];
                suggestions.extend(
                    notification
                        .errors()
                        .iter()
                        .map(|error| format!("  • {}", error.message())),
                );
                suggestions
            }
            Self::InvalidArgument(msg) => vec![
                "Check the arguments passed to the command".into(),
                format!("Details: {}", msg),
            ],
            Self::NotFound { entity, .. } => vec![
                format!("No {} exists with that identifier", entity.to_lowercase()),
                "Try: catalog genre list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } | Self::InvalidArgument(_) => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
