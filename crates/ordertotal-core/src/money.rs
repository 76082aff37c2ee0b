//! # Money Module
//!
//! Provides the `Money` type: an integer minor-unit amount tagged with its
//! currency.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    10 cents + 20 cents = 30 cents   ✓ exact                             │
//! │    quantity × unit price is integer × integer: never rounds             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Tagged With a Currency?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  200 EUR + 100 USD = ???                                                │
//! │                                                                         │
//! │  An untagged i64 would happily say 300. Money refuses:                  │
//! │    checked_add → Err(CurrencyMismatch { expected: EUR, found: USD })   │
//! │                                                                         │
//! │  Overflow is refused the same way:                                      │
//! │    checked_add / checked_mul → Err(Overflow { .. })                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ordertotal_core::money::Money;
//!
//! let price = Money::from_code(1099, "EUR").unwrap(); // 10.99 EUR
//!
//! let line = price.checked_mul(3).unwrap();           // 32.97 EUR
//! let total = line.checked_add(&price).unwrap();      // 43.96 EUR
//! assert_eq!(total.amount(), 4396);
//!
//! let dollars = Money::from_code(100, "USD").unwrap();
//! assert!(total.checked_add(&dollars).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::Currency;
use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest unit of its currency.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and credits
/// - **Currency tag**: Every operation between two amounts checks it
/// - **No operator overloads**: `+` and `*` cannot fail, these can
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

/// The result of a total computation.
pub type Total = Money;

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use ordertotal_core::currency::Currency;
    /// use ordertotal_core::money::Money;
    ///
    /// let eur = Currency::from_code("EUR").unwrap();
    /// let price = Money::new(1099, eur); // 10.99 EUR
    /// assert_eq!(price.amount(), 1099);
    /// ```
    #[inline]
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Money { amount, currency }
    }

    /// Creates a Money value, looking the currency up by code.
    pub fn from_code(amount: i64, code: &str) -> CoreResult<Self> {
        Ok(Money::new(amount, Currency::from_code(code)?))
    }

    /// Returns zero in the given currency.
    #[inline]
    pub const fn zero(currency: Currency) -> Self {
        Money::new(0, currency)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.amount > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// True when both amounts are in the same currency.
    #[inline]
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Adds two amounts of the same currency.
    ///
    /// ## Errors
    /// - [`CoreError::CurrencyMismatch`] if the currencies differ
    /// - [`CoreError::Overflow`] if the sum leaves the i64 range
    pub fn checked_add(&self, other: &Money) -> CoreResult<Money> {
        self.ensure_same_currency(other)?;

        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CoreError::Overflow {
                operation: "addition",
            })
    }

    /// Multiplies by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ordertotal_core::money::Money;
    ///
    /// let unit_price = Money::from_code(299, "USD").unwrap(); // 2.99 USD
    /// let line_total = unit_price.checked_mul(3).unwrap();
    /// assert_eq!(line_total.amount(), 897); // 8.97 USD
    /// ```
    ///
    /// ## Errors
    /// [`CoreError::Overflow`] if the quantity or the product does not fit
    /// in i64.
    pub fn checked_mul(&self, quantity: u64) -> CoreResult<Money> {
        i64::try_from(quantity)
            .ok()
            .and_then(|qty| self.amount.checked_mul(qty))
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CoreError::Overflow {
                operation: "multiplication",
            })
    }

    fn ensure_same_currency(&self, other: &Money) -> CoreResult<()> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(CoreError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                found: other.currency.code().to_string(),
            })
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount in major units followed by the code: `10.99 EUR`.
///
/// ## Note
/// This is for logs and debugging. Localized formatting belongs to whoever
/// presents the total.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let digits = u32::from(self.currency.minor_units());
        let abs = self.amount.unsigned_abs();

        if digits == 0 {
            return write!(f, "{}{} {}", sign, abs, self.currency.code());
        }

        let divisor = 10u64.pow(digits);
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            abs / divisor,
            abs % divisor,
            self.currency.code(),
            width = digits as usize
        )
    }
}
