//! # Validation Module
//!
//! Input validation for values entering the calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Construction (THIS MODULE)                                   │
//! │  ├── Currency codes: three ASCII letters, registered                   │
//! │  └── Identifiers: non-empty, bounded length                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Computation (total module)                                   │
//! │  ├── Item currency must equal order currency                           │
//! │  └── Checked multiply / add (overflow)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ordertotal_core::validation::{validate_currency_code, validate_identifier};
//!
//! assert_eq!(validate_currency_code(" usd ").unwrap(), "USD");
//! assert!(validate_identifier("order id", "45").is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of order and item identifiers.
pub const MAX_IDENTIFIER_LEN: usize = 64;

/// Validates an alphabetic currency code and returns it normalized.
///
/// ## Rules
/// - Must not be empty
/// - Exactly three ASCII letters after trimming
///
/// Registration is checked by [`Currency::from_code`](crate::currency::Currency::from_code),
/// not here.
///
/// ## Returns
/// The trimmed, upper-cased code.
pub fn validate_currency_code(code: &str) -> ValidationResult<String> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: format!("'{}' is not a three-letter alphabetic code", code),
        });
    }

    Ok(code.to_ascii_uppercase())
}

/// Validates an opaque identifier (order ID, item ID).
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most [`MAX_IDENTIFIER_LEN`] characters
///
/// The value itself is otherwise opaque and kept as given.
pub fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if trimmed.chars().count() > MAX_IDENTIFIER_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_IDENTIFIER_LEN,
        });
    }

    Ok(())
}
