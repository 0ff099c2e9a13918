//! Field kinds, constraint messages and the validation error shared by all field types.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// The kind of a validated patient field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Id,
    Phone,
    Email,
    Address,
    Appointment,
    MedicalHistory,
}

impl FieldKind {
    /// Fixed, user-facing description of what a valid value looks like.
    pub fn constraint_message(self) -> &'static str {
        match self {
            FieldKind::Name => {
                "Names should only contain alphanumeric characters and spaces, and it should not be blank"
            }
            FieldKind::Id => {
                "Ids should start with S, T, F, G or M, followed by 1 to 7 digits and end with an uppercase checksum letter"
            }
            FieldKind::Phone => {
                "Phone numbers should only contain digits, and be between 3 and 15 digits long"
            }
            FieldKind::Email => {
                "Emails should be of the format local-part@domain, where the local-part contains alphanumerics and + _ . - and the domain is made of period-separated labels ending in at least 2 characters"
            }
            FieldKind::Address => "Addresses can take any values, and it should not be blank",
            FieldKind::Appointment => {
                "Appointments should be a valid date and time: dd/MM/yyyy HH:mm when entered (two-digit years are accepted), yyyy-MM-dd HH:mm when stored"
            }
            FieldKind::MedicalHistory => {
                "Medical histories should only contain alphanumeric characters, spaces and hyphens, and it should not be blank"
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Name => "Name",
            FieldKind::Id => "Id",
            FieldKind::Phone => "Phone",
            FieldKind::Email => "Email",
            FieldKind::Address => "Address",
            FieldKind::Appointment => "Appointment",
            FieldKind::MedicalHistory => "MedicalHistory",
        };
        f.write_str(name)
    }
}

/// A raw value failed its field's format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: FieldKind,
    pub message: &'static str,
}

impl ValidationError {
    /// Create the error for a field kind, with its constraint message.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            message: kind.constraint_message(),
        }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Compile a pattern once and keep it for the life of the process.
///
/// Patterns are string literals owned by this crate, so a compile failure is a
/// programming error caught by the unit tests of each field type.
pub(crate) fn cached_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("field pattern must compile"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_kind_message() {
        let err = ValidationError::new(FieldKind::Phone);
        assert_eq!(err.kind, FieldKind::Phone);
        assert_eq!(err.to_string(), FieldKind::Phone.constraint_message());
    }

    #[test]
    fn test_appointment_message_names_the_field() {
        assert!(FieldKind::Appointment
            .constraint_message()
            .starts_with("Appointments"));
        assert_eq!(FieldKind::MedicalHistory.to_string(), "MedicalHistory");
    }
}
