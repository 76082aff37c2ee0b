//! # Order Total Calculator
//!
//! Binds an [`EmptyOrderPolicy`] to the pure core computation and logs each
//! outcome.
//!
//! ## Call Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CalculatorConfig ──► OrderTotalCalculator { policy }                   │
//! │                              │                                          │
//! │  compute(&order) ────────────┤                                          │
//! │                              ▼                                          │
//! │              ordertotal_core::compute_total(order, policy)              │
//! │                              │                                          │
//! │                   ┌──────────┴──────────┐                               │
//! │                   ▼                     ▼                               │
//! │             Ok(total)              Err(CoreError)                       │
//! │             debug! event           warn! event                          │
//! │                   │                     │                               │
//! │                   └──── returned as-is ─┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator holds no mutable state: one instance can be shared across
//! threads and reused for any number of orders.

use ordertotal_core::{compute_total, CoreResult, EmptyOrderPolicy, Money, Order};
use tracing::{debug, warn};

use crate::config::CalculatorConfig;

/// Computes order totals under a fixed empty-order policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderTotalCalculator {
    policy: EmptyOrderPolicy,
}

impl OrderTotalCalculator {
    /// Creates a calculator with an explicit policy.
    pub const fn new(policy: EmptyOrderPolicy) -> Self {
        OrderTotalCalculator { policy }
    }

    /// Creates a calculator from loaded configuration.
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.empty_policy())
    }

    /// Returns a copy of this calculator using `policy` instead.
    pub const fn with_policy(self, policy: EmptyOrderPolicy) -> Self {
        Self::new(policy)
    }

    /// The policy applied to empty orders.
    pub const fn policy(&self) -> EmptyOrderPolicy {
        self.policy
    }

    /// Computes the total of one order.
    ///
    /// ## Example
    /// ```rust
    /// use ordertotal_calculator::OrderTotalCalculator;
    /// use ordertotal_core::{EmptyOrderPolicy, Order};
    ///
    /// let calculator = OrderTotalCalculator::new(EmptyOrderPolicy::ZeroOnEmpty);
    /// let order = Order::new("46", "USD", vec![]).unwrap();
    ///
    /// let total = calculator.compute(&order).unwrap();
    /// assert_eq!(total.amount(), 0);
    /// assert_eq!(total.currency().code(), "USD");
    /// ```
    pub fn compute(&self, order: &Order) -> CoreResult<Money> {
        let result = compute_total(order, self.policy);

        match &result {
            Ok(total) => debug!(
                order_id = %order.id,
                items = order.item_count(),
                policy = %self.policy,
                total = %total,
                "Order total computed"
            ),
            Err(e) => warn!(
                order_id = %order.id,
                items = order.item_count(),
                policy = %self.policy,
                error = %e,
                "Order total failed"
            ),
        }

        result
    }

    /// Computes the totals of several independent orders, in input order.
    ///
    /// One failing order does not affect the others.
    pub fn compute_many<'a, I>(&self, orders: I) -> Vec<CoreResult<Money>>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        orders.into_iter().map(|order| self.compute(order)).collect()
    }
}
