//! # ordertotal-core: Pure Order Total Logic
//!
//! Computes the monetary total of an order from its line items. Everything
//! here is a pure function over immutable values: no I/O, no logging, no
//! global state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Order Total Workspace                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ordertotal-calculator                             │   │
//! │  │    OrderTotalCalculator, CalculatorConfig, tracing              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ordertotal-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │ currency │  │  money   │  │  types   │  │    total     │   │   │
//! │  │   │ Currency │  │  Money   │  │  Order   │  │ compute_total│   │   │
//! │  │   │ registry │  │ checked  │  │  Item    │  │              │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - ISO-4217 currency registry
//! - [`money`] - Currency-tagged integer money with checked arithmetic
//! - [`types`] - Order, Item and the empty-order policy
//! - [`total`] - The total computation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same order + same policy = same result
//! 2. **Integer Money**: minor units in i64, never floats
//! 3. **No Coercion**: different currencies never add up
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use ordertotal_core::{EmptyOrderPolicy, Item, Money, Order};
//!
//! let order = Order::new(
//!     "45",
//!     "EUR",
//!     vec![Item::new("21", 2, Money::from_code(100, "EUR").unwrap()).unwrap()],
//! )
//! .unwrap();
//!
//! let total = order.compute_total(EmptyOrderPolicy::ErrorOnEmpty).unwrap();
//! assert_eq!(total.to_string(), "2.00 EUR");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod money;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::Currency;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Total};
pub use total::compute_total;
pub use types::*;
