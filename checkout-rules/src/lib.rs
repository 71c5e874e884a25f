//! Checkout business rules for a Korean-won storefront.
//!
//! Every rule here is a pure function: the shipping fee charged for an order,
//! whether the required terms of service were accepted, how an amount of won
//! is displayed, and whether a string is loosely shaped like an email address.

pub mod config;
pub mod currency;
pub mod email;
pub mod error;
pub mod macros;
pub mod money;
pub mod prelude;
pub mod shipping;
pub mod terms;

pub use crate::config::ShippingPolicy;
pub use crate::currency::format_currency;
pub use crate::email::{validate_email, EmailAddress};
pub use crate::error::RulesError;
pub use crate::money::Won;
pub use crate::shipping::{
    get_shipping_fee, order_total, remaining_for_free_shipping, shipping_notice,
};
pub use crate::terms::{check_all_required_terms, Term};
