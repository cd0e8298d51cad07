use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A single human-readable rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Ordered, append-only report of validation errors.
///
/// Invariant: entries are never removed or reordered. A report is created
/// fresh for each validation attempt and discarded once it has been turned
/// into a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    /// An empty report.
    pub fn create() -> Self {
        Self::default()
    }

    /// A report holding exactly one error.
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Add one error at the end.
    pub fn append(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Add every error of `other` after the existing ones, keeping its order.
    pub fn append_all(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Run a domain step, folding its validation failure into this report.
    ///
    /// Returns `Ok(Some(value))` when the step succeeds and `Ok(None)` when it
    /// failed validation (its errors are now appended here). Any other
    /// failure is handed back untouched.
    pub fn capture<T>(
        &mut self,
        step: impl FnOnce() -> Result<T, DomainError>,
    ) -> Result<Option<T>, DomainError> {
        match step() {
            Ok(value) => Ok(Some(value)),
            Err(DomainError::Validation { notification, .. }) => {
                self.append_all(notification);
                Ok(None)
            }
            Err(other) => Err(other),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl From<ValidationError> for Notification {
    fn from(error: ValidationError) -> Self {
        Self::from_error(error)
    }
}
