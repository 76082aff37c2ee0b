//! # ordertotal-calculator: The Order Total Component
//!
//! Wraps the pure `ordertotal-core` computation with the things a running
//! program needs around it: configuration and structured logging.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ordertotal-calculator                                │
//! │                                                                         │
//! │  ┌───────────────────┐        ┌──────────────────────────┐              │
//! │  │  CalculatorConfig │───────►│   OrderTotalCalculator   │              │
//! │  │  file + env       │ policy │   compute / compute_many │              │
//! │  └───────────────────┘        └────────────┬─────────────┘              │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                         ordertotal_core::compute_total                  │
//! │                                                                         │
//! │  tracing events: config load/save, every computed or failed total      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use ordertotal_calculator::{CalculatorConfig, OrderTotalCalculator};
//! use ordertotal_core::{Item, Money, Order};
//!
//! let config = CalculatorConfig::default();
//! let calculator = OrderTotalCalculator::from_config(&config);
//!
//! let price = Money::from_code(100, "EUR").unwrap();
//! let order = Order::new("45", "EUR", vec![Item::new("21", 2, price).unwrap()]).unwrap();
//!
//! assert_eq!(calculator.compute(&order).unwrap().to_string(), "2.00 EUR");
//! ```

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::OrderTotalCalculator;
pub use config::{CalculatorConfig, TotalsSettings};
pub use error::{CalculatorError, CalculatorResult};

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,ordertotal=debug";

/// Initializes the tracing subscriber.
///
/// Reads `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`]. Returns false
/// if a global subscriber was already installed (by an earlier call or by
/// the host program), in which case nothing changes.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        assert!(!init_tracing());
    }
}
