//! # Error Types
//!
//! Structured error types for calc_core. Every calculator reports invalid
//! input through the same enum so a caller can show a message, branch on
//! a stable code, or serialize the error as JSON next to a result.
//!
//! Incomplete input is *not* an error: see [`crate::outcome::Outcome::Pending`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_term(term_years: f64) -> CalcResult<()> {
//!     if term_years <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "term_years".to_string(),
//!             value: term_years.to_string(),
//!             reason: "Term must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not an integer, wrong order, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Unit key not present in the category's conversion table
    #[error("Unknown unit '{unit}' for {category}")]
    UnknownUnit { category: String, unit: String },

    /// Inputs are well-formed but outside the calculation's mathematical domain
    #[error("{calculation}: {reason}")]
    DomainError { calculation: String, reason: String },

    /// Input rejected up front because the result would be unreasonably large
    #[error("'{field}' = {value} exceeds the limit of {limit}")]
    LimitExceeded {
        field: String,
        value: String,
        limit: String,
    },

    /// Arithmetic overflowed (integer wraparound or a non-finite float result)
    #[error("Arithmetic overflow in {calculation}")]
    Overflow { calculation: String },

    /// Settings file could not be read or parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create a DomainError
    pub fn domain(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create a LimitExceeded error
    pub fn limit_exceeded(field: impl Into<String>, value: impl ToString, limit: impl ToString) -> Self {
        CalcError::LimitExceeded {
            field: field.into(),
            value: value.to_string(),
            limit: limit.to_string(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(calculation: impl Into<String>) -> Self {
        CalcError::Overflow {
            calculation: calculation.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors the user fixes by changing what they typed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::UnknownUnit { .. }
                | CalcError::DomainError { .. }
                | CalcError::LimitExceeded { .. }
                | CalcError::Overflow { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::LimitExceeded { .. } => "LIMIT_EXCEEDED",
            CalcError::Overflow { .. } => "OVERFLOW",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

/// Reject NaN and infinities for a named field.
pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(value)
}

/// Reject zero, negative and non-finite values for a named field.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Reject negative and non-finite values for a named field.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("term_years", "-5", "Term must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_unit("Length", "furlong").error_code(), "UNKNOWN_UNIT");
        assert_eq!(CalcError::limit_exceeded("n", 5000, 1000).error_code(), "LIMIT_EXCEEDED");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::domain("factorial", "negative").is_input_error());
        assert!(!CalcError::config("settings.toml", "bad").is_input_error());
    }

    #[test]
    fn test_require_helpers() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_finite("x", f64::NAN).is_err());
    }
}
