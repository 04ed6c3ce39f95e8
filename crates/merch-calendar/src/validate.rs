//! Boundary guards for calendar coordinates.
//!
//! Each guard rejects an out-of-range value with its own error kind instead
//! of clamping it. Callers may branch on the kind, so the four guards stay
//! separate even though they share one range check.

use std::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::error::{CalendarError, Result};

pub const WEEKS: RangeInclusive<u32> = 0..=53;
pub const PERIODS: RangeInclusive<u32> = 1..=12;
pub const QUARTERS: RangeInclusive<u32> = 1..=5;

fn check_range(
    value: u32,
    valid: RangeInclusive<u32>,
    err: impl FnOnce(u32) -> CalendarError,
) -> Result<u32> {
    if valid.contains(&value) {
        Ok(value)
    } else {
        Err(err(value))
    }
}

/// Fails with [`CalendarError::InvalidDateRange`] when `start > end`.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(CalendarError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Fails with [`CalendarError::InvalidMerchWeek`] unless `week` is in 0..=53.
pub fn validate_week(week: u32) -> Result<u32> {
    check_range(week, WEEKS, |week| CalendarError::InvalidMerchWeek { week })
}

/// Fails with [`CalendarError::InvalidPeriod`] unless `period` is in 1..=12.
pub fn validate_period(period: u32) -> Result<u32> {
    check_range(period, PERIODS, |period| CalendarError::InvalidPeriod {
        period,
    })
}

/// Fails with [`CalendarError::InvalidQuarter`] unless `quarter` is in 1..=5.
///
/// Quarter 5 is accepted: it addresses the extra week of a 53-week year.
pub fn validate_quarter(quarter: u32) -> Result<u32> {
    check_range(quarter, QUARTERS, |quarter| CalendarError::InvalidQuarter {
        quarter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_accepts_equal_endpoints() {
        assert!(validate_date_range(date(2024, 2, 4), date(2024, 2, 4)).is_ok());
    }

    #[test]
    fn test_date_range_rejects_reversed() {
        let err = validate_date_range(date(2024, 2, 5), date(2024, 2, 4)).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidDateRange {
                start: date(2024, 2, 5),
                end: date(2024, 2, 4),
            }
        );
    }

    #[test]
    fn test_week_bounds() {
        assert_eq!(validate_week(0), Ok(0));
        assert_eq!(validate_week(53), Ok(53));
        assert_eq!(
            validate_week(54),
            Err(CalendarError::InvalidMerchWeek { week: 54 })
        );
    }

    #[test]
    fn test_period_bounds() {
        assert_eq!(validate_period(1), Ok(1));
        assert_eq!(validate_period(12), Ok(12));
        assert_eq!(
            validate_period(0),
            Err(CalendarError::InvalidPeriod { period: 0 })
        );
        assert_eq!(
            validate_period(13),
            Err(CalendarError::InvalidPeriod { period: 13 })
        );
    }

    #[test]
    fn test_quarter_allows_five() {
        assert_eq!(validate_quarter(1), Ok(1));
        assert_eq!(validate_quarter(5), Ok(5));
        assert_eq!(
            validate_quarter(0),
            Err(CalendarError::InvalidQuarter { quarter: 0 })
        );
        assert_eq!(
            validate_quarter(6),
            Err(CalendarError::InvalidQuarter { quarter: 6 })
        );
    }
}
