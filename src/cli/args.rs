//! Command-line argument definitions for dfutils
//!
//! Defines the CLI interface using the clap derive API. Every subcommand
//! standardizes the values given on the command line; no files are read.

use crate::models::Strictness;
use clap::{Parser, Subcommand};

/// CLI arguments for the dfutils cell standardizer
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dfutils",
    version,
    about = "Standardize locale-ambiguous money, date and ID values",
    long_about = "Standardizes raw cell values the same way the dfutils library does: \
                  monetary amounts with either decimal separator, day-first or ISO dates, \
                  spreadsheet serial dates, zero-padded national IDs and lineage-tagged \
                  file names."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fail on the first unrecognized value instead of reporting it as missing
    #[arg(short, long, global = true)]
    pub strict: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Standardize monetary amounts (e.g. "R$ 1.234,56")
    Money(ValuesArgs),
    /// Standardize dates (e.g. "01/02/2000", "2000-02-01", "36557")
    Date(ValuesArgs),
    /// Normalize national ID numbers (e.g. "123.456.789-10")
    Id(ValuesArgs),
    /// Extract the lineage date from file names ending in _dd.mm.yyyy.csv
    LineageDate(ValuesArgs),
    /// Clean column headers (trim, lowercase, remove accents)
    Headers(ValuesArgs),
}

/// Raw values passed to a subcommand
#[derive(Debug, Clone, Parser)]
pub struct ValuesArgs {
    /// Values to standardize
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

impl Args {
    /// Strictness requested on the command line
    pub fn strictness(&self) -> Strictness {
        Strictness::from(self.strict)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
