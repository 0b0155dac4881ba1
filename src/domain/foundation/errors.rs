//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' must be strictly positive, got {actual}")]
    NotPositive { field: String, actual: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a missing field validation error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField { field: field.into() }
    }

    /// Creates a not-positive validation error.
    pub fn not_positive(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
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

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    MissingRequiredInput,
    IncompleteProfile,
    OutOfRange,

    // Not found errors
    AssessmentNotFound,

    // State errors
    InvalidStateTransition,
    ScenarioNotReachable,
    AssessmentClosed,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingRequiredInput => "MISSING_REQUIRED_INPUT",
            ErrorCode::IncompleteProfile => "INCOMPLETE_PROFILE",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::AssessmentNotFound => "ASSESSMENT_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::ScenarioNotReachable => "SCENARIO_NOT_REACHABLE",
            ErrorCode::AssessmentClosed => "ASSESSMENT_CLOSED",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_missing_field_displays_correctly() {
        let err = ValidationError::missing_field("monthly_income");
        assert_eq!(format!("{}", err), "Field 'monthly_income' is required");
    }

    #[test]
    fn validation_error_not_positive_displays_correctly() {
        let err = ValidationError::not_positive("property_value", 0.0);
        assert_eq!(
            format!("{}", err),
            "Field 'property_value' must be strictly positive, got 0"
        );
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("dip_percent", 10, 40, 55);
        assert_eq!(
            format!("{}", err),
            "Field 'dip_percent' must be between 10 and 40, got 55"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::AssessmentNotFound, "Assessment not found");
        assert_eq!(format!("{}", err), "[ASSESSMENT_NOT_FOUND] Assessment not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "monthly_income")
            .with_detail("reason", "not positive");

        assert_eq!(err.details.get("field"), Some(&"monthly_income".to_string()));
        assert_eq!(err.details.get("reason"), Some(&"not positive".to_string()));
    }

    #[test]
    fn domain_error_from_validation_error_keeps_message() {
        let err: DomainError = ValidationError::missing_field("risk_comfort").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("risk_comfort"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(
            format!("{}", ErrorCode::MissingRequiredInput),
            "MISSING_REQUIRED_INPUT"
        );
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
