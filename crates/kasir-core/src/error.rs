//! # Error Types
//!
//! Validation error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Error Types                           │
//! │                                                              │
//! │  kasir-core errors (this file)                               │
//! │  └── ValidationError  - Input validation failures            │
//! │                                                              │
//! │  kasir-db errors (separate crate)                            │
//! │  ├── DbError          - Database operation failures          │
//! │  └── CheckoutError    - Full checkout failure taxonomy       │
//! │                                                              │
//! │  Flow: ValidationError → CheckoutError → caller              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, limits, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when caller input does not meet requirements.
/// Raised before any business logic or storage access runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required value is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "items".to_string(),
        };
        assert_eq!(err.to_string(), "items is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }
}
