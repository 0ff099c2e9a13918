//! Medical history entries and free-text remarks.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::validation::{cached_regex, FieldKind, ValidationError, ValidationResult};

static HISTORY_PATTERN: OnceLock<Regex> = OnceLock::new();

/// One entry of a patient's medical history, e.g. `Type 2 Diabetes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MedicalHistory(String);

impl MedicalHistory {
    /// Check a raw string against the medical history rule.
    pub fn is_valid(raw: &str) -> bool {
        cached_regex(&HISTORY_PATTERN, r"^[A-Za-z0-9][A-Za-z0-9 \-]*$").is_match(raw)
    }

    /// Validate a raw entry.
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        if !Self::is_valid(&raw) {
            return Err(ValidationError::new(FieldKind::MedicalHistory));
        }
        Ok(Self(raw))
    }

    /// Get the entry text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MedicalHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Free-text note about a patient. Always valid, may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    /// Create a remark; any text is accepted.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the remark text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the remark is blank.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
