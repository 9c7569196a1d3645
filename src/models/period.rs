//! Year-month period used for time-based filtering
//!
//! Transactions are bucketed into calendar months; the canonical string form
//! is zero-padded `YYYY-MM`.

use chrono::{DateTime, Datelike, Utc};
use std::fmt;
use std::str::FromStr;

/// A year-month bucket
///
/// Ordering is chronological, so sorting descending yields the most recent
/// period first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, validating the month
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Get the period containing the given timestamp (UTC calendar date)
    pub fn from_date(date: DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_zero_padded() {
        let period = Period::new(2024, 3).unwrap();
        assert_eq!(format!("{}", period), "2024-03");
    }

    #[test]
    fn test_parse() {
        let period: Period = "2024-03".parse().unwrap();
        assert_eq!(period, Period::new(2024, 3).unwrap());

        assert!("2024-13".parse::<Period>().is_err());
        assert!("March 2024".parse::<Period>().is_err());
    }

    #[test]
    fn test_from_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        assert_eq!(Period::from_date(date), Period::new(2024, 3).unwrap());
    }

    #[test]
    fn test_chronological_ordering() {
        let jan = Period::new(2024, 1).unwrap();
        let mar = Period::new(2024, 3).unwrap();
        let dec_prev = Period::new(2023, 12).unwrap();

        assert!(jan < mar);
        assert!(dec_prev < jan);

        let mut periods = vec![jan, dec_prev, mar];
        periods.sort_by(|a, b| b.cmp(a));
        assert_eq!(periods, vec![mar, jan, dec_prev]);
    }
}
