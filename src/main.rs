//! Simlog Studio CLI
//!
//! Offline post-processing for simulator benchmark output logs.
//! Aggregates PC histogram dumps and per-core cache statistics into CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use simlog_studio::commands::{
    execute_cache_stats, execute_histogram, CacheStatsArgs, HistogramArgs,
};

/// Simlog Studio - CSV aggregation for simulator benchmark logs
#[derive(Parser, Debug)]
#[command(name = "simlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge the PC histogram sections of one benchmark log into a CSV
    Histogram {
        /// Benchmark log containing `>>>>>PC_HISTORGRAM<<<<<` sections
        input: PathBuf,

        /// Output path for the combined CSV
        output: PathBuf,
    },

    /// Sum per-core cache statistics across simulation run logs
    #[command(name = "cache-stats")]
    CacheStats {
        /// Output path for the summary CSV
        output: PathBuf,

        /// Run logs to aggregate; names must match `*-<scheme>-<size>-*`
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Histogram { input, output } => {
            execute_histogram(HistogramArgs { input, output })?;
        }

        Commands::CacheStats { output, inputs } => {
            execute_cache_stats(CacheStatsArgs { output, inputs })?;
        }
    }

    Ok(())
}
