use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use merch_calendar::{
    all_dates_between, comparison_day_with_options, sales_release_dates_for_season,
    sales_release_dates_for_year, sales_release_day, ComparisonOptions, MerchCalendar, Nrf454,
    Season,
};
use serde::Serialize;
use tracing::info;

use crate::cli::ReleaseArgs;

#[derive(Debug, Serialize)]
struct Comparison {
    date: NaiveDate,
    year: i32,
    restated: bool,
    comparison_day: NaiveDate,
}

#[derive(Debug, Serialize)]
struct Release {
    period: u32,
    year: i32,
    sales_release_day: NaiveDate,
}

#[derive(Debug, Serialize)]
struct DateInfo {
    date: NaiveDate,
    fiscal_year: i32,
    season: Season,
    quarter: u32,
    period: u32,
    week: u32,
    weekday: String,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}

pub fn dates(start: NaiveDate, end: NaiveDate) -> Result<()> {
    let days: Vec<NaiveDate> = all_dates_between(start, end)?.collect();
    info!(count = days.len(), "enumerated dates");
    print_json(&days)
}

pub fn compare(date: NaiveDate, year: i32, unrestated: bool) -> Result<()> {
    let options = ComparisonOptions {
        restated: !unrestated,
    };
    let day = comparison_day_with_options(&Nrf454, date, year, &options)
        .with_context(|| format!("cannot compare {date} against fiscal {year}"))?;
    print_json(&Comparison {
        date,
        year,
        restated: options.restated,
        comparison_day: day,
    })
}

pub fn release(args: ReleaseArgs) -> Result<()> {
    let calendar = Nrf454;
    let (period, year) = match (args.date, args.period, args.year) {
        (Some(date), _, _) => (calendar.period(date)?, calendar.fiscal_year(date)?),
        (None, Some(period), Some(year)) => (period, year),
        _ => anyhow::bail!("either --date or both --period and --year are required"),
    };
    let day = sales_release_day(&calendar, period, year)?;
    print_json(&Release {
        period,
        year,
        sales_release_day: day,
    })
}

pub fn release_season(season: Season, year: i32) -> Result<()> {
    print_json(&sales_release_dates_for_season(&Nrf454, season, year)?)
}

pub fn release_year(year: i32) -> Result<()> {
    print_json(&sales_release_dates_for_year(&Nrf454, year)?)
}

pub fn info(date: NaiveDate) -> Result<()> {
    let calendar = Nrf454;
    print_json(&DateInfo {
        date,
        fiscal_year: calendar.fiscal_year(date)?,
        season: calendar.season(date)?,
        quarter: calendar.quarter(date)?,
        period: calendar.period(date)?,
        week: calendar.week(date)?,
        weekday: date.weekday().to_string(),
    })
}
