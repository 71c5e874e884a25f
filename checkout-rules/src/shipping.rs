//! Shipping fee rule.
//!
//! The fee is always a number. How far an order is from free shipping is a
//! separate computation, and the human-readable notice is a third one built
//! on top of the other two.

use tracing::{instrument, trace};

use crate::{currency::group_thousands, ShippingPolicy, Won};

/// Orders at or above this amount ship for free.
pub const FREE_SHIPPING_THRESHOLD: u64 = 30_000;
/// Fee charged for orders below [`FREE_SHIPPING_THRESHOLD`].
pub const BASE_SHIPPING_FEE: u64 = 3_000;

impl ShippingPolicy {
    pub fn is_free(&self, order_amount: Won) -> bool {
        order_amount >= self.free_shipping_threshold
    }

    #[instrument(level = "trace", skip(self), fields(threshold = self.free_shipping_threshold.0))]
    pub fn fee_for(&self, order_amount: Won) -> Won {
        if self.is_free(order_amount) {
            trace!("free shipping");
            Won::ZERO
        } else {
            trace!(fee = self.base_fee.0, "charging shipping");
            self.base_fee
        }
    }

    /// What the customer still has to add to reach free shipping; zero once reached.
    pub fn remaining_for_free_shipping(&self, order_amount: Won) -> Won {
        self.free_shipping_threshold.saturating_sub(order_amount)
    }

    pub fn total_for(&self, order_amount: Won) -> Won {
        order_amount.saturating_add(self.fee_for(order_amount))
    }

    /// Notice shown on a product page, e.g. `배송비 3,000원 (5,000원 더 담으면 무료배송!)`.
    pub fn notice_for(&self, order_amount: Won) -> String {
        let fee = self.fee_for(order_amount);
        if fee == Won::ZERO {
            return "무료배송".to_string();
        }
        format!(
            "배송비 {}원 ({}원 더 담으면 무료배송!)",
            group_thousands(fee.0),
            group_thousands(self.remaining_for_free_shipping(order_amount).0)
        )
    }
}

pub fn get_shipping_fee(order_amount: u64) -> u64 {
    ShippingPolicy::default().fee_for(Won(order_amount)).0
}

pub fn remaining_for_free_shipping(order_amount: u64) -> u64 {
    ShippingPolicy::default()
        .remaining_for_free_shipping(Won(order_amount))
        .0
}

/// Order amount plus its shipping fee.
pub fn order_total(order_amount: u64) -> u64 {
    ShippingPolicy::default().total_for(Won(order_amount)).0
}

pub fn shipping_notice(order_amount: u64) -> String {
    ShippingPolicy::default().notice_for(Won(order_amount))
}
