//! Date validation and search windows

use chrono::NaiveDate;
use std::fmt;

use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a `YYYY-MM-DD` date, returning the input unchanged
pub fn validate_date(s: &str) -> Result<String> {
    parse_date(s).map(|_| s.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
        Error::validation(format!("Data non valida: {}. Usa il formato YYYY-MM-DD", s))
    })
}

/// Inclusive search window.
///
/// Ordering of `from` and `to` is not enforced; an inverted range is sent to
/// the search API as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Parse both ends from `YYYY-MM-DD` strings
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        let range = Self::new(parse_date(from)?, parse_date(to)?);
        if !range.is_ordered() {
            log::warn!("Date range {} is inverted, search will likely return nothing", range);
        }
        Ok(range)
    }

    pub fn is_ordered(&self) -> bool {
        self.from <= self.to
    }

    pub fn start_str(&self) -> String {
        self.from.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.to.format(DATE_FORMAT).to_string()
    }
}

/// Search API range syntax: `from..to`
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_str(), self.end_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_returns_input() {
        assert_eq!(validate_date("2024-01-31").unwrap(), "2024-01-31");
        assert_eq!(validate_date("2024-02-29").unwrap(), "2024-02-29");
    }

    #[test]
    fn test_validate_date_invalid() {
        assert!(validate_date("invalid").is_err());
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("15-01-2024").is_err());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("2024-13-01").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_date_error_message() {
        let err = validate_date("bad").unwrap_err();
        assert!(err.to_string().contains("bad"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_range_display() {
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        assert_eq!(range.to_string(), "2024-01-01..2024-01-31");
        assert_eq!(range.start_str(), "2024-01-01");
        assert_eq!(range.end_str(), "2024-01-31");
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let range = DateRange::parse("2024-02-01", "2024-01-01").unwrap();
        assert!(!range.is_ordered());
        assert_eq!(range.to_string(), "2024-02-01..2024-01-01");
    }

    #[test]
    fn test_single_day_range_is_ordered() {
        let range = DateRange::parse("2024-03-10", "2024-03-10").unwrap();
        assert!(range.is_ordered());
    }
}
