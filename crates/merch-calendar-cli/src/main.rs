mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Dates { start, end } => commands::dates(start, end),
        Command::Compare {
            date,
            year,
            unrestated,
        } => commands::compare(date, year, unrestated),
        Command::Release(args) => commands::release(args),
        Command::ReleaseSeason { season, year } => commands::release_season(season, year),
        Command::ReleaseYear { year } => commands::release_year(year),
        Command::Info { date } => commands::info(date),
    }
}
