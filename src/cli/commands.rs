//! Command implementations for the dfutils CLI
//!
//! Runs the standardizer chosen on the command line over each value and
//! prints one tab-separated `input -> output` line per value.

use crate::cli::args::{Args, Commands};
use crate::frame::clean_header;
use crate::models::Strictness;
use crate::standardize::{extract_embedded_date, standardize_date, standardize_id, standardize_money};
use crate::{DfUtilsError, Result};
use colored::Colorize;
use tracing::{debug, info};

/// Result of standardizing one command-line value
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub input: String,
    /// `None` when the value was reported as missing
    pub output: Option<String>,
}

/// Summary of a CLI run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub values_processed: usize,
    pub values_missing: usize,
}

/// Main command runner
///
/// Sets up logging, standardizes every value and prints the results to
/// stdout. In Strict mode the first unrecognized value ends the run.
pub fn run(args: Args) -> Result<RunStats> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let Some(command) = &args.command else {
        return Ok(RunStats::default());
    };

    let outcomes = evaluate(command, args.strictness())?;
    let mut stats = RunStats {
        values_processed: outcomes.len(),
        ..Default::default()
    };

    for outcome in &outcomes {
        match &outcome.output {
            Some(output) => println!("{}\t{}", outcome.input, output.green()),
            None => {
                stats.values_missing += 1;
                println!("{}\t{}", outcome.input, "<missing>".yellow());
            }
        }
    }

    info!(
        "Standardized {} values, {} missing",
        stats.values_processed, stats.values_missing
    );
    Ok(stats)
}

/// Standardize every value of `command`
pub fn evaluate(command: &Commands, strictness: Strictness) -> Result<Vec<Outcome>> {
    match command {
        Commands::Money(args) => collect(&args.values, |value| {
            Ok(standardize_money(Some(value), strictness)?
                .into_option()
                .map(|amount| format!("{:.2}", amount)))
        }),
        Commands::Date(args) => collect(&args.values, |value| {
            Ok(standardize_date(Some(value), strictness)?
                .into_option()
                .map(|date| date.to_string()))
        }),
        Commands::Id(args) => collect(&args.values, |value| {
            Ok(Some(standardize_id(Some(value), strictness)))
        }),
        Commands::LineageDate(args) => collect(&args.values, |value| {
            Ok(Some(extract_embedded_date(value)?.to_string()))
        }),
        Commands::Headers(args) => {
            collect(&args.values, |value| Ok(Some(clean_header(value))))
        }
    }
}

fn collect<F>(values: &[String], mut standardize: F) -> Result<Vec<Outcome>>
where
    F: FnMut(&str) -> Result<Option<String>>,
{
    values
        .iter()
        .map(|value| {
            Ok(Outcome {
                input: value.clone(),
                output: standardize(value)?,
            })
        })
        .collect()
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dfutils={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| DfUtilsError::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::ValuesArgs;

    fn values(items: &[&str]) -> ValuesArgs {
        ValuesArgs {
            values: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn outputs(outcomes: &[Outcome]) -> Vec<Option<&str>> {
        outcomes.iter().map(|o| o.output.as_deref()).collect()
    }

    #[test]
    fn test_money_outcomes() {
        let command = Commands::Money(values(&["1.234,56", "1.23,45", "7"]));
        let outcomes = evaluate(&command, Strictness::Lenient).unwrap();

        assert_eq!(outputs(&outcomes), vec![Some("1234.56"), None, Some("7.00")]);
        assert_eq!(outcomes[1].input, "1.23,45");
    }

    #[test]
    fn test_date_outcomes_strict() {
        let ok = Commands::Date(values(&["1/2/2000", "36557"]));
        assert_eq!(
            outputs(&evaluate(&ok, Strictness::Strict).unwrap()),
            vec![Some("2000-02-01"), Some("2000-02-01")]
        );

        let bad = Commands::Date(values(&["1/2/2000", "01//20"]));
        let err = evaluate(&bad, Strictness::Strict).unwrap_err();
        assert!(err.is_irrecognizable());
    }

    #[test]
    fn test_id_and_header_outcomes() {
        let ids = Commands::Id(values(&["000000123-45"]));
        assert_eq!(
            outputs(&evaluate(&ids, Strictness::Lenient).unwrap()),
            vec![Some("00000012345")]
        );

        let headers = Commands::Headers(values(&["  Çç "]));
        assert_eq!(
            outputs(&evaluate(&headers, Strictness::Lenient).unwrap()),
            vec![Some("cc")]
        );
    }

    #[test]
    fn test_lineage_errors_even_when_lenient() {
        let command = Commands::LineageDate(values(&["Bradesco01.02.2000.csv"]));
        let err = evaluate(&command, Strictness::Lenient).unwrap_err();

        assert!(matches!(err, DfUtilsError::MissingLineageTag { .. }));
    }
}
