//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur while validating domain values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be greater than zero")]
    NotPositive { field: String },

    #[error("Field '{field}' cannot be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a not-positive validation error.
    pub fn not_positive(field: impl Into<String>) -> Self {
        ValidationError::NotPositive { field: field.into() }
    }

    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates a non-finite value validation error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::NotPositive { field }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotFinite { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}
