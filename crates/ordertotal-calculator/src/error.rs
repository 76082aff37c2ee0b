//! # Calculator Error Types
//!
//! Errors raised by the calculator crate itself. Calculation failures keep
//! their [`CoreError`] type all the way to the caller.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Categories                                    │
//! │                                                                         │
//! │  CONFIGURATION                  │  CALCULATION                          │
//! │  ─────────────                  │  ───────────                          │
//! │  • Config file unreadable       │  • Empty order (ErrorOnEmpty)         │
//! │  • Invalid TOML                 │  • Currency mismatch                  │
//! │  • Invalid policy value         │  • Arithmetic overflow                │
//! │  • No path to save to           │                                       │
//! │                                                                         │
//! │  → CalculatorError              │  → CoreError (wrapped only when it   │
//! │                                 │    crosses a CalculatorResult)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use ordertotal_core::CoreError;
use thiserror::Error;

/// Result type alias for calculator operations.
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Calculator error type.
#[derive(Debug, Error)]
pub enum CalculatorError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid calculator configuration.
    #[error("Invalid calculator configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Calculation Errors
    // =========================================================================
    /// Order total computation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<std::io::Error> for CalculatorError {
    fn from(err: std::io::Error) -> Self {
        CalculatorError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CalculatorError {
    fn from(err: toml::de::Error) -> Self {
        CalculatorError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for CalculatorError {
    fn from(err: toml::ser::Error) -> Self {
        CalculatorError::ConfigSaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_transparent() {
        let err: CalculatorError = CoreError::EmptyOrder {
            order_id: "46".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Order 46 contains no items");
        assert!(matches!(err, CalculatorError::Core(CoreError::EmptyOrder { .. })));
    }

    #[test]
    fn test_toml_error_maps_to_load_failure() {
        let err: CalculatorError = toml::from_str::<toml::Value>("not = [valid")
            .unwrap_err()
            .into();
        assert!(matches!(err, CalculatorError::ConfigLoadFailed(_)));
    }
}
