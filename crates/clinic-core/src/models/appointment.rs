//! Appointment date/time with origin-dependent grammars.
//!
//! A value typed by a user and a value read back from a save file follow two
//! separate rule sets:
//!
//! | Origin      | Grammar              | Example            |
//! |-------------|----------------------|--------------------|
//! | `UserInput` | `d/M/yyyy HH:mm`     | `5/3/2024 14:30`   |
//! |             | `d/M/yy HH:mm`       | `5/3/24 14:30`     |
//! | `Storage`   | `yyyy-MM-dd HH:mm`   | `2024-03-05 14:30` |
//!
//! The grammars are disjoint: a save string is never accepted as user input
//! and an ambiguous two-digit year is never accepted from storage.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::{Captures, Regex};
use thiserror::Error;

use super::validation::{cached_regex, FieldKind, ValidationError, ValidationResult};

/// Where a raw appointment string came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Freshly typed by a user.
    UserInput,
    /// Read back from a save file.
    Storage,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::UserInput => f.write_str("user input"),
            Origin::Storage => f.write_str("storage"),
        }
    }
}

/// The raw string matched its grammar's shape but not a real date/time, or
/// did not match the shape at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{raw}' is not a valid appointment for {origin}, expected {}", .origin.grammar().name)]
pub struct BadAppointmentFormat {
    pub origin: Origin,
    pub raw: String,
}

/// A named appointment rule set: a shape pattern with named captures
/// `day`, `month`, `year`, `hour` and `minute`.
pub struct AppointmentGrammar {
    pub name: &'static str,
    pattern: &'static str,
    cell: &'static OnceLock<Regex>,
}

static USER_INPUT_CELL: OnceLock<Regex> = OnceLock::new();
static STORAGE_CELL: OnceLock<Regex> = OnceLock::new();

pub static USER_INPUT_GRAMMAR: AppointmentGrammar = AppointmentGrammar {
    name: "d/M/yyyy HH:mm",
    pattern: r"^(?P<day>[0-9]{1,2})/(?P<month>[0-9]{1,2})/(?P<year>[0-9]{4}|[0-9]{2}) (?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{2})$",
    cell: &USER_INPUT_CELL,
};

pub static STORAGE_GRAMMAR: AppointmentGrammar = AppointmentGrammar {
    name: "yyyy-MM-dd HH:mm",
    pattern: r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2}) (?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})$",
    cell: &STORAGE_CELL,
};

const SAVE_FORMAT: &str = "%Y-%m-%d %H:%M";
const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";
const SAVEABLE_YEARS: RangeInclusive<i32> = 0..=9999;

impl AppointmentGrammar {
    fn regex(&self) -> &'static Regex {
        cached_regex(self.cell, self.pattern)
    }

    fn captures<'t>(&self, raw: &'t str) -> Option<Captures<'t>> {
        self.regex().captures(raw)
    }

    fn to_date_time(caps: &Captures<'_>) -> Option<NaiveDateTime> {
        let field = |name: &str| caps.name(name).map(|m| m.as_str());

        let year_raw = field("year")?;
        let mut year: i32 = year_raw.parse().ok()?;
        if year_raw.len() == 2 {
            year += 2000;
        }
        let month: u32 = field("month")?.parse().ok()?;
        let day: u32 = field("day")?.parse().ok()?;
        let hour: u32 = field("hour")?.parse().ok()?;
        let minute: u32 = field("minute")?.parse().ok()?;

        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(NaiveDateTime::new(date, time))
    }
}

impl Origin {
    /// The rule set that applies to strings of this origin.
    pub fn grammar(self) -> &'static AppointmentGrammar {
        match self {
            Origin::UserInput => &USER_INPUT_GRAMMAR,
            Origin::Storage => &STORAGE_GRAMMAR,
        }
    }
}

/// An upcoming appointment. Absence of an appointment is `Option::None` on
/// the record, never a special value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Appointment(NaiveDateTime);

impl Appointment {
    /// Shape check only: digits and delimiters in the places the origin's
    /// grammar expects. Calendar validity is checked by [`Appointment::parse`].
    pub fn is_valid_format(raw: &str, origin: Origin) -> bool {
        origin.grammar().regex().is_match(raw)
    }

    /// Parse under the origin's grammar, rejecting impossible dates and times.
    pub fn parse(raw: &str, origin: Origin) -> Result<Self, BadAppointmentFormat> {
        let bad = || BadAppointmentFormat {
            origin,
            raw: raw.to_string(),
        };
        let caps = origin.grammar().captures(raw).ok_or_else(bad)?;
        AppointmentGrammar::to_date_time(&caps)
            .map(Self)
            .ok_or_else(bad)
    }

    /// Parse, reporting any failure with the Appointment constraint message.
    pub fn new(raw: &str, origin: Origin) -> ValidationResult<Self> {
        Self::parse(raw, origin).map_err(|_| ValidationError::new(FieldKind::Appointment))
    }

    /// Wrap a date-time, dropping seconds.
    ///
    /// Years outside `0..=9999` are refused: their save string would not have
    /// four year digits and could never be read back.
    pub fn from_date_time(value: NaiveDateTime) -> ValidationResult<Self> {
        if !SAVEABLE_YEARS.contains(&value.year()) {
            return Err(ValidationError::new(FieldKind::Appointment));
        }
        // Storage has minute precision.
        let truncated = value
            .with_second(0)
            .and_then(|v| v.with_nanosecond(0))
            .unwrap_or(value);
        Ok(Self(truncated))
    }

    /// Get the date and time.
    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    /// Canonical storage form, `yyyy-MM-dd HH:mm`.
    pub fn to_save_string(&self) -> String {
        self.0.format(SAVE_FORMAT).to_string()
    }
}

impl fmt::Display for Appointment {
    /// User-entry form, `dd/MM/yyyy HH:mm`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}
