//! The calendar-primitive contract the query engine is built on.
//!
//! A primitive provider owns the week-numbering table: where each fiscal
//! year starts, which years carry a 53rd week, and how weeks group into
//! periods. The engine in [`crate::query`] never looks past this trait.

use chrono::NaiveDate;

use crate::error::Result;
use crate::range::DateRange;
use crate::season::Season;

/// Conversions between calendar dates and merchandise coordinates.
///
/// Implementations must be pure: the same arguments always give the same
/// answer, with no I/O and no interior state.
pub trait MerchCalendar {
    /// The merch week (1-based within the fiscal year) containing `date`.
    fn week(&self, date: NaiveDate) -> Result<u32>;

    /// The period (1..=12) containing `date`.
    fn period(&self, date: NaiveDate) -> Result<u32>;

    /// The fiscal year `date` belongs to.
    fn fiscal_year(&self, date: NaiveDate) -> Result<i32>;

    /// The days of `period` in fiscal `year`.
    fn period_date_range(&self, period: u32, year: i32) -> Result<DateRange>;

    /// The seven days of merch `week` in fiscal `year`.
    ///
    /// With `restated`, weeks of a 53-week year are realigned so they line
    /// up with neighbouring 52-week years.
    fn week_date_range(&self, week: u32, year: i32, restated: bool) -> Result<DateRange>;

    /// The quarter (1..=4) containing `date`.
    fn quarter(&self, date: NaiveDate) -> Result<u32> {
        Ok((self.period(date)? - 1) / 3 + 1)
    }

    /// The season containing `date`.
    fn season(&self, date: NaiveDate) -> Result<Season> {
        Season::of_period(self.period(date)?)
    }
}
