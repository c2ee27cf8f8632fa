//! Command-line interface for the `datekit` binary.

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::constants::CONFIG_GENERATED;
use crate::error::DateError;
use crate::utils::datetime::{self, parse_date, parse_date_time};
use crate::utils::relative;
use crate::Instant;
use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "datekit")]
#[command(about = "Small calendar utilities.")]
pub struct CommandLine {
    /// Reference time used instead of the system clock (YYYY-MM-DD[ HH:MM:SS])
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Configuration file to load instead of the default lookup
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format a date with a token template
    #[command(alias = "f")]
    Format {
        date: String,
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Shift a date by a number of days
    Add {
        date: String,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    /// Check whether a date is today
    Today { date: String },
    /// Ordinal day of the year
    DayOfYear { date: String },
    /// Approximate week number
    Week { date: String },
    /// Number of days in a month
    DaysInMonth { month: u32, year: i32 },
    /// Relative time since a date or datetime
    Ago { datetime: String },
    /// Everything datekit knows about a date
    #[command(alias = "i")]
    Info {
        date: String,
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration file
    InitConfig { path: Option<PathBuf> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The clock selected by `--now`, or the system clock
    pub fn clock(&self) -> Result<Box<dyn Clock>, DateError> {
        match &self.now {
            Some(text) => parse_date_time(text)
                .map(|at| Box::new(FixedClock::new(at)) as Box<dyn Clock>)
                .map_err(|_| DateError::InvalidReference(text.clone())),
            None => Ok(Box::new(SystemClock)),
        }
    }

    /// Load the configuration named by `--config`, or the default one
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path),
            None => Config::load(),
        }
    }
}

/// Date template, extended with the time template when `instant` is not at midnight
fn default_template(config: &Config, instant: Instant) -> String {
    if instant.time() == NaiveTime::MIN {
        config.display.template.clone()
    } else {
        format!("{} {}", config.display.template, config.display.time_template)
    }
}

/// Execute a command and return the text to print
pub fn run(command: &Commands, config: &Config, clock: &dyn Clock) -> Result<String> {
    let template = config.display.template.as_str();

    let output = match command {
        Commands::Format { date, template: custom } => {
            let instant = parse_date_time(date)?;
            match custom {
                Some(custom) => datetime::format_date(instant, custom),
                None => datetime::format_date(instant, &default_template(config, instant)),
            }
        }
        Commands::Add { date, days } => {
            let instant = parse_date(date)?;
            datetime::format_date(datetime::add_days(instant, *days)?, template)
        }
        Commands::Today { date } => datetime::is_today_with(parse_date(date)?, clock).to_string(),
        Commands::DayOfYear { date } => datetime::day_of_year(parse_date(date)?).to_string(),
        Commands::Week { date } => datetime::week_number(parse_date(date)?).to_string(),
        Commands::DaysInMonth { month, year } => datetime::days_in_month(*month, *year).to_string(),
        Commands::Ago { datetime } => relative::time_ago_with(parse_date_time(datetime)?, clock),
        Commands::Info { date, json } => {
            let instant: Instant = parse_date_time(date)?;
            let info = datetime::describe(instant, &default_template(config, instant), clock.now());
            if *json {
                serde_json::to_string_pretty(&info).context("Failed to serialize date info")?
            } else {
                format!(
                    "date:          {}\nday of year:   {}\nweek:          {}\ndays in month: {}\ntoday:         {}\nrelative:      {}",
                    info.formatted, info.day_of_year, info.week_number, info.days_in_month, info.is_today, info.relative
                )
            }
        }
        Commands::InitConfig { path } => {
            let path = match path {
                Some(path) => path.clone(),
                None => Config::get_default_config_path()?,
            };
            let written = Config::generate_default_config(&path)?;
            format!("{}: {}", CONFIG_GENERATED, written.display())
        }
    };

    log::debug!("{:?} -> {}", command, output);
    Ok(output)
}
