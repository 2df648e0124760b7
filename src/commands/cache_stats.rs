//! Cache-stats command implementation.
//!
//! The cache-stats command:
//! 1. Reads run parameters out of every input file name
//! 2. Scans each log for per-core stat rows
//! 3. Groups rows by (partition scheme, cache size)
//! 4. Sums each group and derives its miss rates
//! 5. Writes the summary CSV

use crate::aggregator::{group_rows, summarize_groups};
use crate::output::write_cache_csv;
use crate::parser::{parse_run_params, scan_cache_log, StatRow};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the cache-stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CacheStatsArgs {
    /// Output path for the summary CSV
    pub output: PathBuf,

    /// Run logs to aggregate; names encode `-<scheme>-<size>-`
    pub inputs: Vec<PathBuf>,
}

/// Execute the cache-stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Cache-stats command arguments
///
/// # Returns
/// Ok if aggregation succeeds, Err with context if any step fails
///
/// # Errors
/// * File-name pattern or file open failures
/// * Non-numeric counter fields
/// * A group with zero accesses (miss rate undefined)
/// * Output write failures
pub fn execute_cache_stats(args: CacheStatsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Aggregating {} cache run logs", args.inputs.len());

    // Step 1+2: Scan every run log
    info!("Step 1/3: Scanning run logs...");
    let mut rows: Vec<StatRow> = Vec::new();
    for input in &args.inputs {
        let params = parse_run_params(input)
            .with_context(|| format!("Bad run file name {}", input.display()))?;
        let file = File::open(input)
            .with_context(|| format!("Failed to open input file {}", input.display()))?;
        let captured = scan_cache_log(BufReader::new(file), params)
            .with_context(|| format!("Failed to read {}", input.display()))?;

        debug!("{}: {} rows", input.display(), captured.len());
        rows.extend(captured);
    }

    // Step 3+4: Group and summarize
    info!("Step 2/3: Summing {} stat rows...", rows.len());
    let groups = group_rows(rows);
    debug!("{} (scheme, size) groups", groups.len());
    let totals = summarize_groups(&groups).context("Failed to summarize cache groups")?;

    // Step 5: Write CSV
    info!("Step 3/3: Writing summary CSV...");
    write_cache_csv(&totals, &args.output).context("Failed to write cache summary CSV")?;

    info!("✓ Cache summary written to: {}", args.output.display());

    let elapsed = start_time.elapsed();
    info!("Aggregation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
