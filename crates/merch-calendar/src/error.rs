//! Error types for merch-calendar operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid merch week: {week} (must be 0..=53)")]
    InvalidMerchWeek { week: u32 },

    #[error("Invalid period: {period} (must be 1..=12)")]
    InvalidPeriod { period: u32 },

    #[error("Invalid quarter: {quarter} (must be 1..=5)")]
    InvalidQuarter { quarter: u32 },

    /// The week range resolved for a comparison did not contain the weekday
    /// of the source date. Only reachable with a broken primitive provider.
    #[error("No date matching the weekday of {date} in week {week} of fiscal year {year}")]
    NoMatchingWeekday {
        date: NaiveDate,
        week: u32,
        year: i32,
    },

    #[error("Invalid season: '{0}' (expected 'spring' or 'fall')")]
    InvalidSeason(String),

    #[error("Fiscal year {year} is outside the representable date range")]
    OutOfRange { year: i32 },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
