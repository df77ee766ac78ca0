//! # Error Types
//!
//! Domain-specific error types for dezemu-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dezemu-core errors (this file)                                        │
//! │  ├── CoreError        - Checkout/domain failures                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  dezemu-store errors (separate crate)                                  │
//! │  └── StorageError     - Durable client storage failures                │
//! │                                                                         │
//! │  NOT errors: cart rejections. "Not enough stock" is a CartOutcome      │
//! │  value — a normal shopper-facing case, reported and recovered locally, │
//! │  never thrown.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain failures surfaced to callers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An order cannot be drafted from an empty cart.
    ///
    /// The checkout page redirects to the cart view in this case; callers
    /// should never reach order creation without lines.
    #[error("cannot build an order from an empty cart")]
    EmptyCart,

    /// Checkout form validation failed (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements, before any
/// business logic runs. Each variant maps to a user-facing form message.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email or slug).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "cannot build an order from an empty cart"
        );

        let err = ValidationError::TooShort {
            field: "full_name".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "full_name must be at least 3 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "address".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
