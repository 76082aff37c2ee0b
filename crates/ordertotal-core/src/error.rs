//! # Error Types
//!
//! Domain-specific error types for ordertotal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ordertotal-core errors (this file)                                    │
//! │  ├── CoreError        - Calculation failures                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ordertotal-calculator errors (separate crate)                         │
//! │  └── CalculatorError  - Config loading / saving failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller (surfaced as-is)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (order ID, currency codes)
//! 3. Errors are enum variants, never String
//! 4. No partial results: any error aborts the whole computation

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Order total calculation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The order has no items and the policy forbids a zero total.
    ///
    /// ## When This Occurs
    /// Only under [`EmptyOrderPolicy::ErrorOnEmpty`](crate::EmptyOrderPolicy).
    /// With `ZeroOnEmpty` the same order yields a zero total instead.
    #[error("Order {order_id} contains no items")]
    EmptyOrder { order_id: String },

    /// Two amounts in different currencies met in one operation.
    ///
    /// ## When This Occurs
    /// ```text
    /// Order (EUR)
    ///   ├── Item A: 2 × 1.00 EUR   ✓
    ///   └── Item B: 1 × 3.00 USD   ✗
    ///        │
    ///        ▼
    /// CurrencyMismatch { expected: "EUR", found: "USD" }
    /// ```
    /// Amounts are never converted or coerced.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// An amount left the representable i64 minor-unit range.
    #[error("Arithmetic overflow during {operation}")]
    Overflow { operation: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while constructing values (currencies, orders), before any
/// arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., a currency code that is not three letters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Well-formed currency code that the registry does not know.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency { code: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
