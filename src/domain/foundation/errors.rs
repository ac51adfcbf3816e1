//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction or input validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' must be a finite number")]
    NonFinite { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a non-finite number validation error.
    pub fn non_finite(field: impl Into<String>) -> Self {
        ValidationError::NonFinite { field: field.into() }
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
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NonFinite { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("entityId");
        assert_eq!(format!("{}", err), "Field 'entityId' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("tempC", 15.0, 60.0, 72.5);
        assert_eq!(
            format!("{}", err),
            "Field 'tempC' must be between 15 and 60, got 72.5"
        );
    }

    #[test]
    fn validation_error_non_finite_displays_correctly() {
        let err = ValidationError::non_finite("load_mA");
        assert_eq!(format!("{}", err), "Field 'load_mA' must be a finite number");
    }

    #[test]
    fn validation_error_reports_field() {
        let err = ValidationError::invalid_format("x-role", "unknown role");
        assert_eq!(err.field(), "x-role");
    }
}
