//! Calendar year as shown in the year registry

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A calendar year written as exactly four digits
///
/// Ordering is numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i32);

impl Year {
    /// Parse a year string, failing with `InvalidFormat` unless it is exactly 4 ASCII digits
    pub fn parse(s: &str) -> Result<Self, LedgerError> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::InvalidFormat(s.to_string()));
        }
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| LedgerError::InvalidFormat(s.to_string()))
    }

    /// Build a year from its numeric value, which must fit in four digits
    pub fn new(value: i32) -> Result<Self, LedgerError> {
        if (0..=9999).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LedgerError::InvalidFormat(value.to_string()))
        }
    }

    /// The year a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self(date.year())
    }

    pub const fn value(&self) -> i32 {
        self.0
    }

    /// January 1st of this year
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 1, 1)
    }

    /// Check whether `date` falls inside this year
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for Year {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
