//! # Order Totals
//!
//! Sums `quantity × unit_price` over an order's items.
//!
//! ## Computation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_total(order, policy)                                           │
//! │       │                                                                 │
//! │       ├── items empty?                                                  │
//! │       │     ├── ZeroOnEmpty  → Ok(0 <order currency>)                   │
//! │       │     └── ErrorOnEmpty → Err(EmptyOrder)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  acc = 0 <order currency>                                               │
//! │  for item in items:                                                     │
//! │       ├── item currency ≠ order currency → Err(CurrencyMismatch)        │
//! │       ├── line = unit_price × quantity   → Err(Overflow)?               │
//! │       └── acc  = acc + line              → Err(Overflow)?               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(acc)                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The first error aborts the fold; no partial total is ever returned.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{EmptyOrderPolicy, Order};

/// Computes the total of `order` under the given empty-order policy.
///
/// The result is always in the order's currency and equals the exact integer
/// sum of every line. Item order does not change it.
///
/// ## Example
/// ```rust
/// use ordertotal_core::{compute_total, CoreError, EmptyOrderPolicy, Item, Money, Order};
///
/// let price = Money::from_code(100, "EUR").unwrap();
/// let order = Order::new("45", "EUR", vec![Item::new("21", 2, price).unwrap()]).unwrap();
///
/// let total = compute_total(&order, EmptyOrderPolicy::ZeroOnEmpty).unwrap();
/// assert_eq!(total.amount(), 200);
/// assert_eq!(total.currency().code(), "EUR");
///
/// let empty = Order::new("46", "USD", vec![]).unwrap();
/// assert!(compute_total(&empty, EmptyOrderPolicy::ZeroOnEmpty).unwrap().is_zero());
/// assert!(matches!(
///     compute_total(&empty, EmptyOrderPolicy::ErrorOnEmpty),
///     Err(CoreError::EmptyOrder { .. })
/// ));
/// ```
///
/// ## Errors
/// - [`CoreError::EmptyOrder`] for an empty order under `ErrorOnEmpty`
/// - [`CoreError::CurrencyMismatch`] if an item is priced in another currency
/// - [`CoreError::Overflow`] if a line or the running sum leaves the i64 range
pub fn compute_total(order: &Order, policy: EmptyOrderPolicy) -> CoreResult<Money> {
    if order.items.is_empty() {
        return match policy {
            EmptyOrderPolicy::ZeroOnEmpty => Ok(Money::zero(order.currency)),
            EmptyOrderPolicy::ErrorOnEmpty => Err(CoreError::EmptyOrder {
                order_id: order.id.clone(),
            }),
        };
    }

    order
        .items
        .iter()
        .try_fold(Money::zero(order.currency), |acc, item| {
            // Checked up front so the error names the order currency as expected
            if item.unit_price.currency() != order.currency {
                return Err(CoreError::CurrencyMismatch {
                    expected: order.currency.code().to_string(),
                    found: item.unit_price.currency().code().to_string(),
                });
            }

            acc.checked_add(&item.line_total()?)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;
    use proptest::prelude::*;

    fn money(amount: i64, code: &str) -> Money {
        Money::from_code(amount, code).unwrap()
    }

    fn item(id: &str, quantity: u64, unit_price: Money) -> Item {
        Item::new(id, quantity, unit_price).unwrap()
    }

    #[test]
    fn test_single_item_order() {
        let order = Order::new("45", "EUR", vec![item("21", 2, money(100, "EUR"))]).unwrap();

        let total = compute_total(&order, EmptyOrderPolicy::ZeroOnEmpty).unwrap();
        assert_eq!(total.amount(), 200);
        assert_eq!(total.currency().code(), "EUR");
    }

    #[test]
    fn test_empty_order_zero_policy() {
        let order = Order::new("46", "USD", vec![]).unwrap();

        let total = compute_total(&order, EmptyOrderPolicy::ZeroOnEmpty).unwrap();
        assert_eq!(total.amount(), 0);
        assert_eq!(total.currency().code(), "USD");
    }

    #[test]
    fn test_empty_order_error_policy() {
        let order = Order::new("46", "USD", vec![]).unwrap();

        let result = compute_total(&order, EmptyOrderPolicy::ErrorOnEmpty);
        assert_eq!(
            result,
            Err(CoreError::EmptyOrder {
                order_id: "46".to_string()
            })
        );
    }

    #[test]
    fn test_policies_agree_on_non_empty_orders() {
        let order = Order::new(
            "47",
            "GBP",
            vec![item("1", 3, money(250, "GBP")), item("2", 1, money(99, "GBP"))],
        )
        .unwrap();

        let zero = compute_total(&order, EmptyOrderPolicy::ZeroOnEmpty).unwrap();
        let error = compute_total(&order, EmptyOrderPolicy::ErrorOnEmpty).unwrap();
        assert_eq!(zero, error);
        assert_eq!(zero.amount(), 849);
    }

    #[test]
    fn test_currency_mismatch() {
        let order = Order::new("48", "EUR", vec![item("21", 1, money(100, "USD"))]).unwrap();

        let result = compute_total(&order, EmptyOrderPolicy::ZeroOnEmpty);
        assert_eq!(
            result,
            Err(CoreError::CurrencyMismatch {
                expected: "EUR".to_string(),
                found: "USD".to_string(),
            })
        );
    }

    #[test]
    fn test_mismatch_after_valid_items_still_fails() {
        let order = Order::new(
            "49",
            "EUR",
            vec![item("1", 1, money(100, "EUR")), item("2", 1, money(100, "CHF"))],
        )
        .unwrap();

        assert!(matches!(
            compute_total(&order, EmptyOrderPolicy::ErrorOnEmpty),
            Err(CoreError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_quantity_lines() {
        let order = Order::new("50", "JPY", vec![item("1", 0, money(5000, "JPY"))]).unwrap();

        // A zero line is still a line: ErrorOnEmpty does not apply
        let total = compute_total(&order, EmptyOrderPolicy::ErrorOnEmpty).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency().code(), "JPY");
    }

    #[test]
    fn test_line_overflow() {
        let order = Order::new("51", "USD", vec![item("1", 2, money(i64::MAX, "USD"))]).unwrap();

        assert_eq!(
            compute_total(&order, EmptyOrderPolicy::ZeroOnEmpty),
            Err(CoreError::Overflow {
                operation: "multiplication"
            })
        );
    }

    #[test]
    fn test_sum_overflow() {
        let order = Order::new(
            "52",
            "USD",
            vec![item("1", 1, money(i64::MAX, "USD")), item("2", 1, money(1, "USD"))],
        )
        .unwrap();

        assert_eq!(
            compute_total(&order, EmptyOrderPolicy::ZeroOnEmpty),
            Err(CoreError::Overflow {
                operation: "addition"
            })
        );
    }

    #[test]
    fn test_refund_lines_reduce_total() {
        let order = Order::new(
            "53",
            "EUR",
            vec![item("1", 2, money(1000, "EUR")), item("2", 1, money(-500, "EUR"))],
        )
        .unwrap();

        let total = order.compute_total(EmptyOrderPolicy::ZeroOnEmpty).unwrap();
        assert_eq!(total.amount(), 1500);
    }

    fn lines() -> impl Strategy<Value = Vec<(u64, i64)>> {
        prop::collection::vec((0u64..1_000, -1_000_000i64..1_000_000), 1..20)
    }

    fn order_from(lines: &[(u64, i64)]) -> Order {
        let items = lines
            .iter()
            .enumerate()
            .map(|(i, &(qty, price))| item(&i.to_string(), qty, money(price, "EUR")))
            .collect();
        Order::new("prop", "EUR", items).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// The total is exactly Σ quantity × unit price.
        #[test]
        fn total_equals_sum_of_lines(entries in lines()) {
            let expected: i64 = entries.iter().map(|&(q, p)| q as i64 * p).sum();

            let total = compute_total(&order_from(&entries), EmptyOrderPolicy::ErrorOnEmpty).unwrap();
            prop_assert_eq!(total.amount(), expected);
            prop_assert_eq!(total.currency().code(), "EUR");
        }

        /// Reversing and rotating the items never changes the total.
        #[test]
        fn item_order_does_not_matter(entries in lines(), shift in 0usize..20) {
            let original = compute_total(&order_from(&entries), EmptyOrderPolicy::ZeroOnEmpty).unwrap();

            let mut reversed = entries.clone();
            reversed.reverse();
            let mut rotated = entries.clone();
            let len = rotated.len();
            rotated.rotate_left(shift % len);

            prop_assert_eq!(
                compute_total(&order_from(&reversed), EmptyOrderPolicy::ZeroOnEmpty).unwrap(),
                original
            );
            prop_assert_eq!(
                compute_total(&order_from(&rotated), EmptyOrderPolicy::ZeroOnEmpty).unwrap(),
                original
            );
        }
    }
}
