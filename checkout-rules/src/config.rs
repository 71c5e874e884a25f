//! Tunable parameters of the shipping rule.

use tracing::debug;

use crate::{
    shipping::{BASE_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD},
    RulesError, Won,
};

/// Threshold and fee used by the shipping rule.
///
/// With the `serde` feature the policy reads from JSON such as
/// `{"freeShippingThreshold": 50000, "baseFee": 2500}`; missing keys keep
/// their default.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Orders at or above this amount ship for free.
    pub free_shipping_threshold: Won,
    /// Fee charged below the threshold.
    pub base_fee: Won,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Won(FREE_SHIPPING_THRESHOLD),
            base_fee: Won(BASE_SHIPPING_FEE),
        }
    }
}

impl ShippingPolicy {
    pub fn new(free_shipping_threshold: Won, base_fee: Won) -> Result<Self, RulesError> {
        let policy = Self { free_shipping_threshold, base_fee };
        policy.validate()?;
        Ok(policy)
    }

    /// A fee with a zero threshold could never be charged.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.free_shipping_threshold == Won::ZERO && self.base_fee != Won::ZERO {
            debug!(policy = ?self, "rejecting shipping policy");
            return Err(RulesError::InvalidArgument(format!(
                "base fee {} is unreachable with a zero free-shipping threshold",
                self.base_fee
            )));
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_json(input: &str) -> Result<Self, RulesError> {
        let policy: Self = serde_json::from_str(input).map_err(|err| {
            debug!(error = %err, "failed to parse shipping policy");
            RulesError::Config(err.to_string())
        })?;
        policy.validate()?;
        Ok(policy)
    }
}
