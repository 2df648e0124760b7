//! Histogram command implementation.
//!
//! The histogram command:
//! 1. Scans one benchmark log for histogram sections
//! 2. Merges the sections into the combined address table
//! 3. Writes the table as CSV

use crate::aggregator::build_combined_table;
use crate::output::write_histogram_csv;
use crate::parser::scan_histogram_log;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the histogram command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct HistogramArgs {
    /// Benchmark log to scan
    pub input: PathBuf,

    /// Output path for the combined CSV
    pub output: PathBuf,
}

/// Execute the histogram command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Histogram command arguments
///
/// # Returns
/// Ok if aggregation succeeds, Err with context if any step fails
///
/// # Errors
/// * Input file open/read failures
/// * Malformed address/count lines
/// * Output write failures
pub fn execute_histogram(args: HistogramArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Aggregating histogram log: {}", args.input.display());

    // Step 1: Scan the log into ordered sections
    info!("Step 1/3: Scanning histogram sections...");
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open input file {}", args.input.display()))?;
    let sections = scan_histogram_log(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    debug!("Scanned {} sections", sections.len());

    // Step 2: Merge into the combined table
    info!("Step 2/3: Building combined address table...");
    let table = build_combined_table(&sections);

    debug!("{} distinct addresses", table.rows.len());

    // Step 3: Write CSV
    info!("Step 3/3: Writing output CSV...");
    write_histogram_csv(&table, &args.output).context("Failed to write histogram CSV")?;

    info!("✓ Histogram CSV written to: {}", args.output.display());

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
