//! Patient name and identifier.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::validation::{cached_regex, FieldKind, ValidationError, ValidationResult};

static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();
static ID_PATTERN: OnceLock<Regex> = OnceLock::new();

/// A patient's full name. Case is preserved as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Check a raw string against the name rule.
    pub fn is_valid(raw: &str) -> bool {
        cached_regex(&NAME_PATTERN, r"^[A-Za-z0-9][A-Za-z0-9 ]*$").is_match(raw)
    }

    /// Validate a raw name.
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(ValidationError::new(FieldKind::Name));
        }
        Ok(Self(raw))
    }

    /// Get the name as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated tokens of the name, as used by keyword search.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Patient identifier, the sole identity key of a record.
///
/// Accepted case-insensitively with surrounding whitespace; always held in
/// upper case, e.g. `S872D` or `T1234567A`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    fn normalize(raw: &str) -> String {
        raw.trim().to_uppercase()
    }

    /// Check a raw string against the identifier rule.
    pub fn is_valid(raw: &str) -> bool {
        cached_regex(&ID_PATTERN, r"^[STFGM][0-9]{1,7}[A-Z]$").is_match(&Self::normalize(raw))
    }

    /// Validate and normalize a raw identifier.
    pub fn new(raw: impl AsRef<str>) -> ValidationResult<Self> {
        let normalized = Self::normalize(raw.as_ref());
        if !Self::is_valid(&normalized) {
            return Err(ValidationError::new(FieldKind::Id));
        }
        Ok(Self(normalized))
    }

    /// Get the upper-case identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw keyword.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        self.0.eq_ignore_ascii_case(keyword.trim())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
