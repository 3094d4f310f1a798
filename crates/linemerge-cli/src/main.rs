//! linemerge CLI
//!
//! Command-line shell around the positional line diff and merge engine

use clap::{Parser, Subcommand};
use linemerge_core::logging_facility::{self, Profile};

mod commands;
mod source;

#[derive(Debug, Parser)]
#[command(name = "linemerge")]
#[command(about = "linemerge - positional line diff and merge", long_about = None)]
struct Cli {
    /// Logging profile (development or production); RUST_LOG overrides the filter
    #[arg(long, global = true, default_value = "development")]
    log_profile: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two documents line by line
    Diff(commands::diff::DiffArgs),
    /// Merge two documents under a strategy
    Merge(commands::merge::MergeArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Merge(args) => commands::merge::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
