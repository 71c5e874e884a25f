pub use crate::config::ShippingPolicy;
pub use crate::currency::{format_currency, group_thousands, WON_SYMBOL};
pub use crate::email::{validate_email, EmailAddress};
pub use crate::error::RulesError;
pub use crate::money::Won;
pub use crate::shipping::*;
pub use crate::terms::{check_all_required_terms, unchecked_required_terms, Term};
