//! Calendar Month Value Object
//!
//! Waste records are keyed by calendar month NAME ("January".."December"),
//! exactly as they are stored and exposed on the wire. The year is not part
//! of the model.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve calendar months, in order
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when a month name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthError {
    input: String,
}

impl fmt::Display for MonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a calendar month name", self.input)
    }
}

impl std::error::Error for MonthError {}

// ============================================================================
// Month Value Object
// ============================================================================

/// A calendar month, identified by its English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Parse a month from its name (case-insensitive, trimmed)
    pub fn from_name(input: impl AsRef<str>) -> Result<Self, MonthError> {
        let trimmed = input.as_ref().trim();
        MONTH_NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(|idx| Self::from_ordinal((idx + 1) as u32).expect("index in 1..=12"))
            .ok_or_else(|| MonthError {
                input: trimmed.to_string(),
            })
    }

    /// Month from its 1-based ordinal (1 = January)
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    /// The current calendar month (system clock, UTC)
    pub fn current() -> Self {
        Self::from_ordinal(Utc::now().month()).expect("chrono month is 1..=12")
    }

    /// 1-based ordinal (January = 1)
    #[inline]
    pub fn ordinal(&self) -> u32 {
        *self as u32 + 1
    }

    /// The month name as stored and serialized
    #[inline]
    pub fn as_str(&self) -> &'static str {
        MONTH_NAMES[*self as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Month {
    type Error = MonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(value)
    }
}

impl TryFrom<&str> for Month {
    type Error = MonthError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_name(value)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.as_str().to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
