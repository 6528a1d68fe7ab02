//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use holidays_core::CalendarDate;

/// holidays - Query the Salling Group holidays API
#[derive(Debug, Parser)]
#[command(name = "holidays")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "HOLIDAYS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Application name sent in the User-Agent (overrides the config file)
    #[arg(long, env = "HOLIDAYS_APPLICATION_NAME")]
    pub application_name: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether a date is a holiday
    IsHoliday {
        /// Date as YYYY-MM-DD, or "today"
        date: String,
    },

    /// List holidays between two dates
    Between {
        /// First date (YYYY-MM-DD or "today")
        start: String,
        /// Last date (YYYY-MM-DD or "today")
        end: String,
    },

    /// List holidays from today until a date
    Until {
        /// Last date (YYYY-MM-DD or "today")
        date: String,
    },

    /// List holidays in the coming year
    Upcoming,

    /// Show the next holiday
    Next,

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration (secrets are not resolved)
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

/// Turns a date argument into a [`CalendarDate`].
///
/// `today` becomes a structured date from the local clock; anything else is
/// handed to the API verbatim.
pub fn parse_date_arg(arg: &str) -> CalendarDate {
    if arg.eq_ignore_ascii_case("today") {
        CalendarDate::today()
    } else {
        CalendarDate::from(arg)
    }
}
