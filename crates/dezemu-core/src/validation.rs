//! # Validation Module
//!
//! Input validation for cart operations and the checkout form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend form                                                │
//! │  ├── Required markers, immediate feedback                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Field lengths and formats before an order draft is built          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted backend                                               │
//! │  ├── Row-level constraints and policies                                │
//! │                                                                         │
//! │  Defense in depth: the backend re-validates everything the client      │
//! │  sends; this layer exists for fast local feedback.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The checkout field limits mirror the hosted backend's form rules:
//! name 3..=100, phone 10..=20, address 10..=500, city 2..=100, postal code
//! 5..=10 characters, all trimmed before checking.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Generic Helpers
// =============================================================================

/// Validates a trimmed string field against a character-length window.
fn validate_length(field: &str, value: &str, min: usize, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
        });
    }
    if len > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be positive (> 0); the stock ceiling is checked by the cart
///   itself against the per-line snapshot.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in kuruş.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free/promotional items)
///
/// ## Example
/// ```rust
/// use dezemu_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(7990).is_ok()); // ₺79.90
/// assert!(validate_price_cents(0).is_ok());    // Free item
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a routing slug.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 200 characters
/// - Lowercase letters, digits, and hyphens only
pub fn validate_slug(slug: &str) -> ValidationResult<()> {
    validate_length("slug", slug, 1, 200)?;

    if !slug
        .trim()
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "must contain only lowercase letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Checkout Form Validators
// =============================================================================

/// Validates the shopper's full name (3..=100 characters).
pub fn validate_full_name(name: &str) -> ValidationResult<()> {
    validate_length("full_name", name, 3, 100)
}

/// Validates a phone number (10..=20 characters).
///
/// Only the length is checked; formats vary too much across carriers for a
/// stricter client-side rule.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_length("phone", phone, 10, 20)
}

/// Validates a delivery address (10..=500 characters).
pub fn validate_address(address: &str) -> ValidationResult<()> {
    validate_length("address", address, 10, 500)
}

/// Validates a city name (2..=100 characters).
pub fn validate_city(city: &str) -> ValidationResult<()> {
    validate_length("city", city, 2, 100)
}

/// Validates a postal code (5..=10 characters).
pub fn validate_postal_code(postal_code: &str) -> ValidationResult<()> {
    validate_length("postal_code", postal_code, 5, 10)
}

/// Validates an email address.
///
/// A minimal structural check; the auth backend owns the real verification.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(7990).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("kablosuz-bluetooth-kulaklik").is_ok());
        assert!(validate_slug("mug-2").is_ok());

        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has Space").is_err());
        assert!(validate_slug("ÜPPER").is_err());
    }

    #[test]
    fn test_validate_full_name() {
        assert!(validate_full_name("Ayşe Yılmaz").is_ok());
        assert!(validate_full_name("Al").is_err()); // below 3 chars
        assert!(validate_full_name("   ").is_err());
        assert!(validate_full_name(&"a".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("05321234567").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone(&"1".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_address_and_city() {
        assert!(validate_address("Atatürk Cad. No:1 D:2").is_ok());
        assert!(validate_address("short").is_err());

        assert!(validate_city("İstanbul").is_ok());
        assert!(validate_city("A").is_err());
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(validate_postal_code("34000").is_ok());
        assert!(validate_postal_code("123").is_err());
        assert!(validate_postal_code("12345678901").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ayse@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ayse@nodot").is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "İstanbul" is 8 characters but more bytes; must pass the 2..=100 rule
        assert!(validate_city("İz").is_ok());
    }
}
