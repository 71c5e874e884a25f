use std::fmt;

use tracing::debug;

use crate::{currency::format_currency, define_newtype, RulesError};

define_newtype!(
    /// A whole amount of Korean won. Won has no subunit, so there is no fraction.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    Won,
    u64
);

impl Won {
    pub const ZERO: Won = Won(0);

    pub fn get(self) -> u64 {
        self.0
    }

    /// Convert a floating amount coming from an untyped caller.
    ///
    /// Non-finite, negative and fractional values are rejected with
    /// [`RulesError::InvalidArgument`]; so are values beyond `u64::MAX`.
    pub fn try_from_f64(value: f64) -> Result<Self, RulesError> {
        let reason = if !value.is_finite() {
            Some("amount must be finite")
        } else if value < 0.0 {
            Some("amount must not be negative")
        } else if value.fract() != 0.0 {
            Some("won amounts have no fractional part")
        } else if value >= u64::MAX as f64 {
            Some("amount is out of range")
        } else {
            None
        };

        match reason {
            Some(reason) => {
                debug!(value, reason, "rejecting amount");
                Err(RulesError::InvalidArgument(format!("{reason}, got {value}")))
            }
            None => Ok(Won(value as u64)),
        }
    }

    pub fn saturating_add(self, other: Won) -> Won {
        Won(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Won) -> Won {
        Won(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.0))
    }
}
