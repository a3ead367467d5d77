//! Custom error types for load-monitor
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for load-monitor operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The store already holds its maximum number of records
    #[error("Limit reached: the store holds at most {capacity} appliances")]
    CapacityExceeded { capacity: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Interactive input reached end of file
    #[error("Input closed")]
    InputClosed,
}

impl MonitorError {
    /// Create a "not found" error for appliances
    pub fn appliance_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Appliance",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for appliances
    pub fn duplicate_appliance(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Appliance",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for MonitorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for load-monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonitorError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = MonitorError::appliance_not_found("Heater");
        assert_eq!(err.to_string(), "Appliance not found: Heater");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_error() {
        let err = MonitorError::duplicate_appliance("Fridge");
        assert_eq!(err.to_string(), "Appliance already exists: Fridge");
        assert!(err.is_duplicate());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_capacity_error() {
        let err = MonitorError::CapacityExceeded { capacity: 100 };
        assert_eq!(
            err.to_string(),
            "Limit reached: the store holds at most 100 appliances"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MonitorError = io_err.into();
        assert!(matches!(err, MonitorError::Io(_)));
    }
}
