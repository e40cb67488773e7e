use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{options::OutputFormat, parsers::DelimiterArg};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "job_insights",
    version = crate::VERSION,
    about = "Salary statistics and salary-range matching over CSV job listings"
)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// CSV field delimiter (single ASCII character, or `tab`)
    #[arg(long, default_value = ",", global = true)]
    pub delimiter: DelimiterArg,

    /// Log debug details to stderr (overrides JOB_INSIGHTS_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Highest numeric max_salary in a listing
    Max {
        /// CSV file with a header row
        path: PathBuf,
    },

    /// Lowest numeric min_salary in a listing
    Min {
        /// CSV file with a header row
        path: PathBuf,
    },

    /// Job count, valid salary ranges and salary extremes
    Summary {
        /// CSV file with a header row
        path: PathBuf,
    },

    /// Jobs whose salary range contains the given salary
    Match {
        /// CSV file with a header row
        path: PathBuf,

        /// Salary to look for (non-negative integer)
        #[arg(long, allow_hyphen_values = true)]
        salary: String,

        /// Fail on the first job with a missing or malformed range instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Check a min/max/salary triple against the salary rules
    Validate {
        #[arg(long, allow_hyphen_values = true)]
        min: String,

        #[arg(long, allow_hyphen_values = true)]
        max: String,

        #[arg(long, allow_hyphen_values = true)]
        salary: String,
    },
}
