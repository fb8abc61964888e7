//! # Error Types
//!
//! Domain-specific error types for tecpa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tecpa-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tecpa-db errors       └── DbError      - Storage failures             │
//! │  tecpa-report errors   └── ReportError  - Export failures              │
//! │  desktop errors        └── AppError     - What the window surfaces     │
//! │                                                                         │
//! │  Flow: ValidationError → inline message (never fatal)                  │
//! │        DbError / ReportError → AppError → blocking error notice        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product carries the requested name.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Sale total would not fit the money representation.
    #[error("Total overflows for quantity {quantity}")]
    TotalOverflow { quantity: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These never abort the program: the screens turn them into inline
/// advisory messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be a positive whole number")]
    MustBePositive { field: String },

    /// Numeric value is below the allowed minimum.
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Invalid format (not a number, too many decimals, ...).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
