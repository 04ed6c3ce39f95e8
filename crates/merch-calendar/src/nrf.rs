//! The National Retail Federation 4-5-4 calendar.
//!
//! A fiscal year ends on the Saturday nearest January 31 of the following
//! calendar year, so every fiscal year starts on a Sunday and runs 52 or 53
//! whole weeks. Periods take 4, 5 and 4 weeks in turn within each quarter;
//! the extra week of a 53-week year goes to period 12.
//!
//! Fiscal years are named after the calendar year they start in: fiscal 2024
//! runs from 2024-02-04 through 2025-02-01.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{CalendarError, Result};
use crate::primitives::MerchCalendar;
use crate::range::DateRange;
use crate::season::Season;
use crate::validate::{validate_period, validate_quarter, validate_week};

const WEEKS_PER_PERIOD: [u32; 12] = [4, 5, 4, 4, 5, 4, 4, 5, 4, 4, 5, 4];

const DAYS_PER_WEEK: u64 = 7;

/// Primitive provider for the standard NRF 4-5-4 calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nrf454;

impl Nrf454 {
    /// First day (a Sunday) of fiscal `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the year cannot be
    /// represented.
    pub fn year_start(&self, year: i32) -> Result<NaiveDate> {
        let out_of_range = || CalendarError::OutOfRange { year };
        let jan31 = NaiveDate::from_ymd_opt(year, 1, 31).ok_or_else(out_of_range)?;

        // Days forward to the next Saturday; more than three means the
        // previous Saturday is nearer.
        let ahead = 6 - jan31.weekday().num_days_from_sunday();
        let prior_year_end = if ahead <= 3 {
            jan31.checked_add_days(Days::new(ahead as u64))
        } else {
            jan31.checked_sub_days(Days::new((7 - ahead) as u64))
        };

        prior_year_end
            .and_then(|d| d.succ_opt())
            .ok_or_else(out_of_range)
    }

    /// Last day (a Saturday) of fiscal `year`.
    pub fn year_end(&self, year: i32) -> Result<NaiveDate> {
        let next = year
            .checked_add(1)
            .ok_or(CalendarError::OutOfRange { year })?;
        self.year_start(next)?
            .pred_opt()
            .ok_or(CalendarError::OutOfRange { year })
    }

    /// 52 or 53.
    pub fn weeks_in_year(&self, year: i32) -> Result<u32> {
        let start = self.year_start(year)?;
        let end = self.year_end(year)?;
        Ok(((end - start).num_days() + 1) as u32 / DAYS_PER_WEEK as u32)
    }

    pub fn is_53_week_year(&self, year: i32) -> Result<bool> {
        Ok(self.weeks_in_year(year)? == 53)
    }

    /// The whole of fiscal `year`.
    pub fn year_date_range(&self, year: i32) -> Result<DateRange> {
        DateRange::new(self.year_start(year)?, self.year_end(year)?)
    }

    /// The six periods of `season` in fiscal `year`.
    pub fn season_date_range(&self, season: Season, year: i32) -> Result<DateRange> {
        let first = season.first_period();
        let start = self.period_date_range(first, year)?.start();
        let end = self.period_date_range(first + 5, year)?.end();
        DateRange::new(start, end)
    }

    /// Quarters 1-4 cover three periods each. Quarter 5 is the 53rd week of
    /// a 53-week year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidQuarter`] for quarters outside 1..=5,
    /// and for quarter 5 of a 52-week year.
    pub fn quarter_date_range(&self, quarter: u32, year: i32) -> Result<DateRange> {
        let quarter = validate_quarter(quarter)?;
        if quarter == 5 {
            if !self.is_53_week_year(year)? {
                return Err(CalendarError::InvalidQuarter { quarter });
            }
            return self.week_date_range(53, year, false);
        }

        let first = (quarter - 1) * 3 + 1;
        let start = self.period_date_range(first, year)?.start();
        let end = self.period_date_range(first + 2, year)?.end();
        DateRange::new(start, end)
    }

    /// The date `weeks` whole weeks after the start of fiscal `year`.
    /// Negative offsets step back into the prior year.
    fn offset_weeks(&self, year: i32, weeks: i64) -> Result<NaiveDate> {
        let start = self.year_start(year)?;
        let days = Days::new(weeks.unsigned_abs() * DAYS_PER_WEEK);
        let shifted = if weeks >= 0 {
            start.checked_add_days(days)
        } else {
            start.checked_sub_days(days)
        };
        shifted.ok_or(CalendarError::OutOfRange { year })
    }

    fn span(&self, year: i32, first_week: u32, weeks: u32) -> Result<DateRange> {
        let start = self.offset_weeks(year, i64::from(first_week) - 1)?;
        let end = self
            .offset_weeks(year, i64::from(first_week) - 1 + i64::from(weeks))?
            .pred_opt()
            .ok_or(CalendarError::OutOfRange { year })?;
        DateRange::new(start, end)
    }
}

/// Period containing a 1-based week; the 53rd week belongs to period 12.
fn period_of_week(week: u32) -> u32 {
    let mut last_week = 0;
    for (idx, weeks) in WEEKS_PER_PERIOD.iter().enumerate() {
        last_week += weeks;
        if week <= last_week {
            return idx as u32 + 1;
        }
    }
    12
}

/// First 1-based week of a valid period.
fn first_week_of_period(period: u32) -> u32 {
    WEEKS_PER_PERIOD[..(period - 1) as usize].iter().sum::<u32>() + 1
}

impl MerchCalendar for Nrf454 {
    fn week(&self, date: NaiveDate) -> Result<u32> {
        let year = self.fiscal_year(date)?;
        let start = self.year_start(year)?;
        Ok(((date - start).num_days() / DAYS_PER_WEEK as i64) as u32 + 1)
    }

    fn period(&self, date: NaiveDate) -> Result<u32> {
        Ok(period_of_week(self.week(date)?))
    }

    fn fiscal_year(&self, date: NaiveDate) -> Result<i32> {
        let year = date.year();
        if date < self.year_start(year)? {
            Ok(year - 1)
        } else {
            Ok(year)
        }
    }

    fn period_date_range(&self, period: u32, year: i32) -> Result<DateRange> {
        let period = validate_period(period)?;
        let mut weeks = WEEKS_PER_PERIOD[(period - 1) as usize];
        if period == 12 && self.is_53_week_year(year)? {
            weeks += 1;
        }
        self.span(year, first_week_of_period(period), weeks)
    }

    /// Week 0 is the week before the fiscal year starts, and weeks past the
    /// end of the year continue into the next one.
    fn week_date_range(&self, week: u32, year: i32, restated: bool) -> Result<DateRange> {
        let week = validate_week(week)?;
        let effective = if restated && self.is_53_week_year(year)? {
            week + 1
        } else {
            week
        };
        self.span(year, effective, 1)
    }
}
