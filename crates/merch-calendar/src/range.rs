//! Inclusive date ranges and day-by-day enumeration.

use std::iter::FusedIterator;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::validate::validate_date_range;

/// An inclusive span of calendar days. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CalendarError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Build a range, rejecting `start > end` with
    /// [`CalendarError::InvalidDateRange`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        validate_date_range(start, end)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both endpoints.
    pub fn num_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the range in ascending order.
    pub fn dates(&self) -> Dates {
        Dates {
            next: self.start,
            remaining: self.num_days(),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Dates {
        self.dates()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Dates {
        self.dates()
    }
}

/// Lazy iterator over the days of a [`DateRange`].
///
/// Cloning yields an independent iterator from the current position, so a
/// sequence can be replayed without recomputing the range.
#[derive(Debug, Clone)]
pub struct Dates {
    next: NaiveDate,
    remaining: usize,
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(next) = current.succ_opt() {
                self.next = next;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Dates {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.next
            .checked_add_days(chrono::Days::new(self.remaining as u64))
    }
}

impl ExactSizeIterator for Dates {}

impl FusedIterator for Dates {}

/// Every calendar day from `start` through `end`, inclusive.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateRange`] if `start > end`; no dates
/// are produced in that case.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use merch_calendar::all_dates_between;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 4).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 2, 6).unwrap();
/// let days: Vec<_> = all_dates_between(start, end).unwrap().collect();
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[2], end);
/// ```
pub fn all_dates_between(start: NaiveDate, end: NaiveDate) -> Result<Dates> {
    Ok(DateRange::new(start, end)?.dates())
}
