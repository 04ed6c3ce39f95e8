//! # merch-calendar
//!
//! Query functions over the NRF 4-5-4 merchandise calendar.
//!
//! Translates between calendar dates and merchandise fiscal coordinates
//! (week, period, quarter, season, year) and derives the business dates that
//! hang off them: year-over-year comparison days and sales release days.
//!
//! ## Modules
//!
//! - [`primitives`] - `MerchCalendar`, the week-numbering contract the queries build on
//! - [`nrf`] - `Nrf454`, the standard National Retail Federation calendar
//! - [`query`] - Comparison days and sales release days
//! - [`range`] - Inclusive date ranges and day-by-day enumeration
//! - [`season`] - Spring and Fall
//! - [`validate`] - Range guards for weeks, periods, quarters and date ranges
//! - [`error`] - Error types

pub mod error;
pub mod nrf;
pub mod primitives;
pub mod query;
pub mod range;
pub mod season;
pub mod validate;

pub use error::{CalendarError, Result};
pub use nrf::Nrf454;
pub use primitives::MerchCalendar;
pub use query::{
    comparison_day, comparison_day_with_options, sales_release_dates_for_season,
    sales_release_dates_for_year, sales_release_day, sales_release_day_for_date,
    ComparisonOptions,
};
pub use range::{all_dates_between, DateRange, Dates};
pub use season::Season;
pub use validate::{validate_date_range, validate_period, validate_quarter, validate_week};
