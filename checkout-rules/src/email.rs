//! Permissive email shape check.
//!
//! This is a syntactic sanity check, not RFC 5322 validation: anything shaped
//! like `local@domain.tld` with no whitespace and a single `@` passes, so
//! strings such as `a@b..c` are accepted.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::RulesError;

/// Non-empty local part, `@`, non-empty domain, `.`, non-empty last segment.
/// No segment may contain whitespace or another `@`.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// A string that passed [`validate_email`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.split().0
    }

    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // The shape guarantees exactly one '@'.
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

impl FromStr for EmailAddress {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if validate_email(s) {
            Ok(EmailAddress(s.to_string()))
        } else {
            debug!(email = s, "rejecting email");
            Err(RulesError::InvalidEmail(s.to_string()))
        }
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = RulesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = RulesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validate_email(&value) {
            Ok(EmailAddress(value))
        } else {
            debug!(email = %value, "rejecting email");
            Err(RulesError::InvalidEmail(value))
        }
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn valid_addresses() {
        assert!(validate_email("test@example.com"));
        assert!(validate_email("user.name@example.com"));
        assert!(validate_email("user+tag@example.co.kr"));
    }

    #[test]
    fn invalid_addresses() {
        assert!(!validate_email("invalid-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user@example."));
        assert!(!validate_email("us er@example.com"));
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email("user@example.com@other"));
        assert!(!validate_email(" test@example.com"));
    }

    #[test]
    fn permissive_shapes_pass() {
        assert!(validate_email("a@b..c"));
        assert!(validate_email("한글@예시.한국"));
    }

    #[test]
    fn email_address_parts() {
        let email: EmailAddress = "user+tag@example.co.kr".parse().unwrap();
        assert_eq!(email.local_part(), "user+tag");
        assert_eq!(email.domain(), "example.co.kr");
        assert_eq!(email.to_string(), "user+tag@example.co.kr");
    }

    #[test]
    fn email_address_rejects() {
        assert_eq!(
            EmailAddress::try_from("user@"),
            Err(RulesError::InvalidEmail("user@".to_string()))
        );
        assert!(EmailAddress::try_from(String::new()).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn email_address_serde() {
        let email: EmailAddress = serde_json::from_str(r#""test@example.com""#).unwrap();
        assert_eq!(email.as_str(), "test@example.com");
        assert_eq!(serde_json::to_string(&email).unwrap(), r#""test@example.com""#);
        assert!(serde_json::from_str::<EmailAddress>(r#""nope""#).is_err());
    }

    proptest! {
        #[test]
        fn generated_shapes_pass(
            local in "[a-z0-9.+_-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}"
        ) {
            let candidate = format!("{local}@{domain}.{tld}");
            prop_assert!(validate_email(&candidate));
        }

        #[test]
        fn no_at_never_passes(s in "[^@]*") {
            prop_assert!(!validate_email(&s));
        }
    }
}
