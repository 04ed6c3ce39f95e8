use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use merch_calendar::Season;

/// NRF 4-5-4 merchandise calendar queries.
#[derive(Parser)]
#[command(
    name = "merchcal",
    version,
    about = "Query the NRF 4-5-4 merchandise calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every date from START through END inclusive.
    Dates {
        start: NaiveDate,
        end: NaiveDate,
    },
    /// Find the comparable day of DATE in another fiscal year.
    Compare {
        date: NaiveDate,

        /// Fiscal year to compare against.
        #[arg(short, long)]
        year: i32,

        /// Use the raw week mapping instead of restated weeks.
        #[arg(long)]
        unrestated: bool,
    },
    /// Sales release day of a single period.
    Release(ReleaseArgs),
    /// Sales release days of the six periods of a season.
    ReleaseSeason {
        season: Season,
        year: i32,
    },
    /// Sales release days of all twelve periods of a fiscal year.
    ReleaseYear {
        year: i32,
    },
    /// Merchandise coordinates of DATE.
    Info {
        date: NaiveDate,
    },
}

#[derive(Args)]
#[group(required = true, multiple = true)]
pub struct ReleaseArgs {
    /// Period number (1-12).
    #[arg(short, long, requires = "year", conflicts_with = "date")]
    pub period: Option<u32>,

    /// Fiscal year of the period.
    #[arg(short, long, requires = "period")]
    pub year: Option<i32>,

    /// Resolve the period from this date instead.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}
