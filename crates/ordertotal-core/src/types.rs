//! # Domain Types
//!
//! The values a total is computed from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                         │
//! │  │     Order       │ 1    * │      Item       │                         │
//! │  │  ─────────────  │───────►│  ─────────────  │                         │
//! │  │  id (opaque)    │        │  id (opaque)    │                         │
//! │  │  currency       │        │  quantity (u64) │                         │
//! │  │  items          │        │  unit_price     │──► Money                │
//! │  └─────────────────┘        └─────────────────┘                         │
//! │                                                                         │
//! │  ┌──────────────────────┐                                               │
//! │  │  EmptyOrderPolicy    │                                               │
//! │  │  ──────────────────  │                                               │
//! │  │  ZeroOnEmpty         │                                               │
//! │  │  ErrorOnEmpty        │                                               │
//! │  └──────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item prices are expected to share the order's currency. That is checked
//! when the total is computed, not here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::Currency;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::validate_identifier;

// =============================================================================
// Empty Order Policy
// =============================================================================

/// What computing the total of an order without items yields.
///
/// ## Policy Behavior
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  items = []                                                             │
/// │                                                                         │
/// │  ZERO_ON_EMPTY (Default)         │  ERROR_ON_EMPTY                      │
/// │  ───────────────────────         │  ──────────────                      │
/// │  → Ok(0 in order currency)       │  → Err(EmptyOrder { order_id })      │
/// │                                                                         │
/// │  items non-empty: both policies compute the same sum                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyOrderPolicy {
    /// An empty order totals zero.
    #[default]
    ZeroOnEmpty,

    /// An empty order is an error.
    ErrorOnEmpty,
}

impl EmptyOrderPolicy {
    /// Returns true if an empty order is rejected.
    pub fn rejects_empty(&self) -> bool {
        matches!(self, EmptyOrderPolicy::ErrorOnEmpty)
    }
}

impl fmt::Display for EmptyOrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyOrderPolicy::ZeroOnEmpty => write!(f, "zero_on_empty"),
            EmptyOrderPolicy::ErrorOnEmpty => write!(f, "error_on_empty"),
        }
    }
}

impl std::str::FromStr for EmptyOrderPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zero_on_empty" | "zero" => Ok(EmptyOrderPolicy::ZeroOnEmpty),
            "error_on_empty" | "error" | "reject" => Ok(EmptyOrderPolicy::ErrorOnEmpty),
            _ => Err(ValidationError::NotAllowed {
                field: "empty_policy".to_string(),
                allowed: vec!["zero_on_empty".to_string(), "error_on_empty".to_string()],
            }),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A line of an order: `quantity` units at `unit_price` each.
///
/// Deserialization goes through [`Item::new`], so a decoded item carries the
/// same identifier guarantees as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    /// Opaque identifier.
    pub id: String,

    /// Number of units (never negative).
    pub quantity: u64,

    /// Price of one unit.
    pub unit_price: Money,
}

impl Item {
    /// Creates an item, validating its identifier.
    pub fn new(id: impl Into<String>, quantity: u64, unit_price: Money) -> CoreResult<Self> {
        let id = id.into();
        validate_identifier("item id", &id)?;

        Ok(Item {
            id,
            quantity,
            unit_price,
        })
    }

    /// Returns `unit_price × quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use ordertotal_core::{Item, Money};
    ///
    /// let item = Item::new("21", 2, Money::from_code(100, "EUR").unwrap()).unwrap();
    /// assert_eq!(item.line_total().unwrap().amount(), 200);
    /// ```
    #[inline]
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// Wire shape of an [`Item`], before validation.
#[derive(Deserialize)]
struct ItemRecord {
    id: String,
    quantity: u64,
    unit_price: Money,
}

impl TryFrom<ItemRecord> for Item {
    type Error = CoreError;

    fn try_from(record: ItemRecord) -> CoreResult<Self> {
        Item::new(record.id, record.quantity, record.unit_price)
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order: line items denominated in one currency.
///
/// Like [`Item`], deserialization validates through the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    /// Opaque identifier.
    pub id: String,

    /// Currency every item is expected to be priced in.
    pub currency: Currency,

    /// Line items, in the order they were added.
    pub items: Vec<Item>,
}

impl Order {
    /// Creates an order, validating its identifier and currency code.
    ///
    /// ## Example
    /// ```rust
    /// use ordertotal_core::Order;
    ///
    /// let order = Order::new("46", "usd", Vec::new()).unwrap();
    /// assert_eq!(order.currency.code(), "USD");
    /// assert!(order.is_empty());
    ///
    /// assert!(Order::new("46", "dollars", Vec::new()).is_err());
    /// ```
    pub fn new(id: impl Into<String>, currency_code: &str, items: Vec<Item>) -> CoreResult<Self> {
        let currency = Currency::from_code(currency_code)?;
        Self::with_currency(id, currency, items)
    }

    /// Creates an order for an already resolved currency.
    pub fn with_currency(
        id: impl Into<String>,
        currency: Currency,
        items: Vec<Item>,
    ) -> CoreResult<Self> {
        let id = id.into();
        validate_identifier("order id", &id)?;

        Ok(Order {
            id,
            currency,
            items,
        })
    }

    /// Returns true if the order has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of lines in the order.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Computes the total under `policy`. See [`crate::total::compute_total`].
    #[inline]
    pub fn compute_total(&self, policy: EmptyOrderPolicy) -> CoreResult<Money> {
        crate::total::compute_total(self, policy)
    }
}

/// Wire shape of an [`Order`], before validation.
#[derive(Deserialize)]
struct OrderRecord {
    id: String,
    currency: Currency,
    #[serde(default)]
    items: Vec<Item>,
}

impl TryFrom<OrderRecord> for Order {
    type Error = CoreError;

    fn try_from(record: OrderRecord) -> CoreResult<Self> {
        Order::with_currency(record.id, record.currency, record.items)
    }
}
