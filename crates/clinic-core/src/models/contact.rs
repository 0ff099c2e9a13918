//! Contact details: phone, email and address.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::validation::{cached_regex, FieldKind, ValidationError, ValidationResult};

static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();
static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

// local-part: alphanumeric segments joined by single special characters
// domain: labels (hyphens only inside a label) joined by periods, last label 2+ chars
const EMAIL_REGEX: &str = concat!(
    r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*",
    r"@",
    r"(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*",
    r"[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?",
    r"$",
);

/// Phone number: digits only, bounded length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Check a raw string against the phone rule.
    pub fn is_valid(raw: &str) -> bool {
        cached_regex(&PHONE_PATTERN, r"^[0-9]{3,15}$").is_match(raw)
    }

    /// Validate a raw phone number.
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(ValidationError::new(FieldKind::Phone));
        }
        Ok(Self(raw))
    }

    /// Get the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address in `local-part@domain` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Check a raw string against the email rule.
    pub fn is_valid(raw: &str) -> bool {
        if !cached_regex(&EMAIL_PATTERN, EMAIL_REGEX).is_match(raw) {
            return false;
        }
        // The regex cannot express a minimum length on the final label alone.
        raw.rsplit_once('@')
            .and_then(|(_, domain)| domain.rsplit('.').next())
            .is_some_and(|last_label| last_label.len() >= 2)
    }

    /// Validate a raw email address.
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(ValidationError::new(FieldKind::Email));
        }
        Ok(Self(raw))
    }

    /// Get the email address as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Postal address: free text that does not start with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Check that a raw address is non-empty and does not start with whitespace.
    pub fn is_valid(raw: &str) -> bool {
        raw.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    /// Validate a raw postal address.
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(ValidationError::new(FieldKind::Address));
        }
        Ok(Self(raw))
    }

    /// Get the address as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_bounds() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(Phone::is_valid("123456789012345"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("1234567890123456"));
        assert!(!Phone::is_valid("9312 1534"));
        assert!(!Phone::is_valid("phone"));
        assert!(!Phone::is_valid(""));
    }

    #[test]
    fn test_valid_emails() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("a1+be.d@example1.com"));
        assert!(Email::is_valid("peter_jack@very-long-domain.org"));
        assert!(Email::is_valid("if.you.dream.it_you.can.do.it@example.com"));
        assert!(Email::is_valid("e1234567@u.nus.edu"));
        assert!(Email::is_valid("test@localhost"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!Email::is_valid(""));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("peterjack@"));
        assert!(!Email::is_valid("peterjackexample.com"));
        assert!(!Email::is_valid("-peterjack@example.com"));
        assert!(!Email::is_valid("peterjack-@example.com"));
        assert!(!Email::is_valid("peter..jack@example.com"));
        assert!(!Email::is_valid("peterjack@example.c"));
        assert!(!Email::is_valid("peterjack@-example.com"));
        assert!(!Email::is_valid("peter jack@example.com"));

        let err = Email::new("nope").unwrap_err();
        assert_eq!(err.kind, FieldKind::Email);
    }

    #[test]
    fn test_address() {
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(Address::is_valid("-"));
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid(" leading space"));
        assert_eq!(Address::new("").unwrap_err().kind, FieldKind::Address);
    }
}
