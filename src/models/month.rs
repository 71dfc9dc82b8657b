//! Year-month value used by the month filter
//!
//! A calendar month identified as "YYYY-MM", with no day component.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::TallyError;

/// A calendar month (year + month), displayed as "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month value without validation
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month a given date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, TallyError> {
        let invalid = || TallyError::validation(format!("Invalid month: '{}' (expected YYYY-MM)", s));

        let (year_str, month_str) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(TallyError::validation(format!("Invalid month: '{}'", s)));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(Month::from_date(date), Month::new(2024, 1));
    }

    #[test]
    fn test_contains() {
        let january = Month::new(2024, 1);
        assert!(january.contains(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(january.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!january.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!january.contains(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2024-01").unwrap(), Month::new(2024, 1));
        assert_eq!(Month::parse("2024-12").unwrap(), Month::new(2024, 12));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(Month::parse("2024").is_err());
        assert!(Month::parse("2024-13").is_err());
        assert!(Month::parse("2024-00").is_err());
        assert!(Month::parse("january").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::new(2024, 1)), "2024-01");
        assert_eq!(format!("{}", Month::new(824, 11)), "0824-11");
    }

    #[test]
    fn test_ordering() {
        assert!(Month::new(2023, 12) < Month::new(2024, 1));
        assert!(Month::new(2024, 1) < Month::new(2024, 2));
    }
}
