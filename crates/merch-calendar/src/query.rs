//! Derived merchandise dates: year-over-year comparison days and sales
//! release days.
//!
//! Every function takes the primitive provider as its first argument and is
//! otherwise a pure function of its inputs. Nothing is cached; each call
//! asks the provider again.
//!
//! # Functions
//!
//! - [`comparison_day`] - The same weekday of the same merch week in another fiscal year
//! - [`sales_release_day`] - First Thursday of a period
//! - [`sales_release_day_for_date`] - Sales release day of the period containing a date
//! - [`sales_release_dates_for_season`] - Six sales release days of a season
//! - [`sales_release_dates_for_year`] - Twelve sales release days of a fiscal year

use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, trace};

use crate::error::{CalendarError, Result};
use crate::primitives::MerchCalendar;
use crate::season::Season;
use crate::validate::{validate_period, PERIODS};

/// Days from a period's first day (a Sunday) to its first Thursday.
const SALES_RELEASE_OFFSET: Days = Days::new(4);

// ── comparison_day ──────────────────────────────────────────────────────────

/// Options for [`comparison_day_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonOptions {
    /// Ask the provider for restated weeks, so a 53-week year lines up
    /// with its neighbours.
    pub restated: bool,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        Self { restated: true }
    }
}

/// The day in fiscal `year` that corresponds to `date` for a year-over-year
/// comparison, using restated weeks.
///
/// For configurable restatement, use [`comparison_day_with_options`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use merch_calendar::{comparison_day, Nrf454};
///
/// // Saturday of week 1 of fiscal 2024, compared against restated 2023.
/// let date = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// let last_year = comparison_day(&Nrf454, date, 2023).unwrap();
/// assert_eq!(last_year, NaiveDate::from_ymd_opt(2023, 2, 11).unwrap());
/// ```
pub fn comparison_day<C>(calendar: &C, date: NaiveDate, year: i32) -> Result<NaiveDate>
where
    C: MerchCalendar + ?Sized,
{
    comparison_day_with_options(calendar, date, year, &ComparisonOptions::default())
}

/// The day in fiscal `year` that corresponds to `date`.
///
/// Resolves the merch week of `date`, asks the provider for that week in
/// `year`, and picks the day with the same weekday as `date`.
///
/// # Errors
///
/// Propagates provider errors. Returns [`CalendarError::NoMatchingWeekday`]
/// if the provider's week range does not contain the weekday of `date`.
pub fn comparison_day_with_options<C>(
    calendar: &C,
    date: NaiveDate,
    year: i32,
    options: &ComparisonOptions,
) -> Result<NaiveDate>
where
    C: MerchCalendar + ?Sized,
{
    let week = calendar.week(date)?;
    let range = calendar.week_date_range(week, year, options.restated)?;
    debug!(
        %date,
        week,
        year,
        restated = options.restated,
        start = %range.start(),
        end = %range.end(),
        "resolved comparison week"
    );

    let weekday = date.weekday();
    range
        .dates()
        .find(|d| d.weekday() == weekday)
        .ok_or(CalendarError::NoMatchingWeekday { date, week, year })
}

// ── sales_release_day ───────────────────────────────────────────────────────

/// The sales release day of `period` in fiscal `year`: the period's first
/// day plus four days.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPeriod`] if `period` is outside 1..=12.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use merch_calendar::{sales_release_day, Nrf454};
///
/// let day = sales_release_day(&Nrf454, 1, 2024).unwrap();
/// assert_eq!(day, NaiveDate::from_ymd_opt(2024, 2, 8).unwrap());
/// ```
pub fn sales_release_day<C>(calendar: &C, period: u32, year: i32) -> Result<NaiveDate>
where
    C: MerchCalendar + ?Sized,
{
    let period = validate_period(period)?;
    let start = calendar.period_date_range(period, year)?.start();
    let day = start
        .checked_add_days(SALES_RELEASE_OFFSET)
        .ok_or(CalendarError::OutOfRange { year })?;
    trace!(period, year, %day, "sales release day");
    Ok(day)
}

/// The sales release day of the period containing `date`.
pub fn sales_release_day_for_date<C>(calendar: &C, date: NaiveDate) -> Result<NaiveDate>
where
    C: MerchCalendar + ?Sized,
{
    let period = calendar.period(date)?;
    let year = calendar.fiscal_year(date)?;
    sales_release_day(calendar, period, year)
}

/// Sales release days of the six periods of `season`, in period order.
pub fn sales_release_dates_for_season<C>(
    calendar: &C,
    season: Season,
    year: i32,
) -> Result<Vec<NaiveDate>>
where
    C: MerchCalendar + ?Sized,
{
    debug!(%season, year, "computing season sales release dates");
    season
        .periods()
        .map(|period| sales_release_day(calendar, period, year))
        .collect()
}

/// Sales release days of all twelve periods of fiscal `year`, in order.
pub fn sales_release_dates_for_year<C>(calendar: &C, year: i32) -> Result<Vec<NaiveDate>>
where
    C: MerchCalendar + ?Sized,
{
    debug!(year, "computing yearly sales release dates");
    PERIODS
        .map(|period| sales_release_day(calendar, period, year))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
