//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' must be a fraction between 0.0 and 1.0, got {actual}")]
    OutOfUnitRange { field: String, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an out of unit range validation error for fractional values.
    pub fn out_of_unit_range(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::OutOfUnitRange {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("question_id");
        assert_eq!(format!("{}", err), "Field 'question_id' cannot be empty");
    }

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("percentage", 0, 100, 120);
        assert_eq!(
            format!("{}", err),
            "Field 'percentage' must be between 0 and 100, got 120"
        );
    }

    #[test]
    fn out_of_unit_range_displays_correctly() {
        let err = ValidationError::out_of_unit_range("confidence", 1.5);
        assert_eq!(
            format!("{}", err),
            "Field 'confidence' must be a fraction between 0.0 and 1.0, got 1.5"
        );
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("data_path", "empty segment");
        assert_eq!(
            format!("{}", err),
            "Field 'data_path' has invalid format: empty segment"
        );
    }
}
