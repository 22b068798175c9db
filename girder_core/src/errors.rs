//! # Error Types
//!
//! Structured error types for girder_core. Every fallible calculation returns
//! a [`DesignResult`], and every variant carries enough context to identify
//! the offending input without re-running the calculation.
//!
//! ## Example
//!
//! ```rust
//! use girder_core::errors::{DesignError, DesignResult};
//!
//! fn validate_height(hn_ft: f64) -> DesignResult<()> {
//!     if hn_ft <= 0.0 {
//!         return Err(DesignError::invalid_input(
//!             "hn_ft",
//!             hn_ft.to_string(),
//!             "Structure height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for girder_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A quantity falls outside the range covered by a code table
    #[error("{quantity} out of range: {value} (valid range {range})")]
    OutOfRange {
        quantity: String,
        value: f64,
        range: String,
    },

    /// Material not found in the built-in table
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// A material specification matches more than one table entry
    #[error("Ambiguous material: '{material_name}' matches {count} entries")]
    AmbiguousMaterial { material_name: String, count: usize },

    /// Shape not found in the shapes database
    #[error("Shape not found: {label}")]
    ShapeNotFound { label: String },

    /// A shape is missing a property required by a check
    #[error("Shape '{label}' has no value for '{property}'")]
    MissingProperty { label: String, property: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// A data file does not conform to its format
    #[error("Malformed data in '{path}' at byte {offset}: {reason}")]
    MalformedData {
        path: String,
        offset: u64,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(quantity: impl Into<String>, value: f64, range: impl Into<String>) -> Self {
        DesignError::OutOfRange {
            quantity: quantity.into(),
            value,
            range: range.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        DesignError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a ShapeNotFound error
    pub fn shape_not_found(label: impl Into<String>) -> Self {
        DesignError::ShapeNotFound {
            label: label.into(),
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(label: impl Into<String>, property: impl Into<String>) -> Self {
        DesignError::MissingProperty {
            label: label.into(),
            property: property.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DesignError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a MalformedData error
    pub fn malformed_data(path: impl Into<String>, offset: u64, reason: impl Into<String>) -> Self {
        DesignError::MalformedData {
            path: path.into(),
            offset,
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::OutOfRange { .. } => "OUT_OF_RANGE",
            DesignError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            DesignError::AmbiguousMaterial { .. } => "AMBIGUOUS_MATERIAL",
            DesignError::ShapeNotFound { .. } => "SHAPE_NOT_FOUND",
            DesignError::MissingProperty { .. } => "MISSING_PROPERTY",
            DesignError::FileError { .. } => "FILE_ERROR",
            DesignError::MalformedData { .. } => "MALFORMED_DATA",
            DesignError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DesignError::invalid_input("hn_ft", "-5.0", "Height must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DesignError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DesignError::shape_not_found("W99X999").error_code(),
            "SHAPE_NOT_FOUND"
        );
        assert_eq!(
            DesignError::material_not_found("A999").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            DesignError::out_of_range("T", 6.0, "0.25 s to 5.0 s").error_code(),
            "OUT_OF_RANGE"
        );
    }

    #[test]
    fn test_error_display() {
        let error = DesignError::out_of_range("Period T", 6.0, "0.25 s to 5.0 s");
        let msg = error.to_string();
        assert!(msg.contains("Period T"));
        assert!(msg.contains("6"));
    }
}
