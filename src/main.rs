use anyhow::Context;
use clap::Parser;
use dfutils::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let strict = args.strict;
    let result = commands::run(args).with_context(|| {
        if strict {
            "Standardization stopped at an unrecognized value (strict mode)"
        } else {
            "Standardization failed"
        }
    });

    match result {
        Ok(_stats) => {
            // Success - results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("dfutils - Cell Value Standardizer");
    println!("=================================");
    println!();
    println!("Standardize locale-ambiguous money, date and ID values into canonical forms.");
    println!();
    println!("USAGE:");
    println!("    dfutils [OPTIONS] <COMMAND> <VALUE>...");
    println!();
    println!("COMMANDS:");
    println!("    money          Standardize monetary amounts");
    println!("    date           Standardize dates and spreadsheet serials");
    println!("    id             Normalize national ID numbers");
    println!("    lineage-date   Extract _dd.mm.yyyy.csv dates from file names");
    println!("    headers        Clean column headers");
    println!();
    println!("OPTIONS:");
    println!("    -s, --strict     Fail on the first unrecognized value");
    println!("    -v, --verbose    Increase logging verbosity");
    println!("    -q, --quiet      Only log errors");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    dfutils money \"R$ 1.234,56\" \"1,234.56\"");
    println!("    dfutils --strict date 01/02/2000 36557");
    println!("    dfutils id \"'123.456.789-10\"");
    println!("    dfutils lineage-date Bradesco_01.02.2000.csv");
}
