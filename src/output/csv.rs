//! CSV writers for both aggregators.
//!
//! The column layout and separators mirror the simulator's own log
//! format (`", "` between fields) so the output feeds straight into the
//! existing plotting notebooks. Addresses print as lowercase hex with a
//! `0x` prefix; miss rates print with f64's shortest round-trip form,
//! no rounding applied.

use crate::aggregator::cache_stats::GroupTotal;
use crate::aggregator::histogram::CombinedTable;
use crate::utils::config::CACHE_CSV_HEADER;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the combined histogram table as CSV.
///
/// **Public** - main entry point for histogram output
///
/// Row format: `0x<hex-address>, <count_0>, ..., <count_{n-1}>, <row-total>`.
/// Rows come out in ascending address order.
///
/// # Arguments
/// * `table` - combined table from the aggregator
/// * `output_path` - path to output CSV file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - empty path or existing directory
pub fn write_histogram_csv(
    table: &CombinedTable,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing histogram CSV to: {}", output_path.display());
    let mut writer = open_output(output_path)?;

    for (address, counts) in &table.rows {
        write!(writer, "0x{:x}", address)?;
        let mut total: u64 = 0;
        for count in counts {
            total += count;
            write!(writer, ", {}", count)?;
        }
        writeln!(writer, ", {}", total)?;
    }

    writer.flush()?;
    info!(
        "Histogram CSV written: {} rows x {} sections",
        table.rows.len(),
        table.section_count
    );

    Ok(())
}

/// Write the cache statistics summary as CSV.
///
/// **Public** - main entry point for cache-stats output
///
/// Emits the fixed header, then one `Total` row per group in the order
/// given (schemes ascending, sizes ascending). The core-id column of a
/// total row is the literal `NaN` and the cache-name column is `Total`.
///
/// # Arguments
/// * `totals` - summarized groups from the aggregator
/// * `output_path` - path to output CSV file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - empty path or existing directory
pub fn write_cache_csv(
    totals: &[GroupTotal],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing cache summary CSV to: {}", output_path.display());
    let mut writer = open_output(output_path)?;

    writeln!(writer, "{}", CACHE_CSV_HEADER)?;
    for total in totals {
        writeln!(
            writer,
            "{}, {}, NaN, Total, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}",
            total.partition_scheme,
            total.cache_size,
            total.bytes_read,
            total.bytes_written,
            total.read_accesses,
            total.write_accesses,
            total.read_misses,
            total.write_misses,
            total.writebacks,
            total.miss_rate,
            total.llc_read_misses,
            total.llc_write_misses,
            total.total_miss_rate
        )?;
    }

    writer.flush()?;
    info!("Cache summary CSV written: {} groups", totals.len());

    Ok(())
}

/// Validate the path and open a buffered writer, creating parent
/// directories if needed.
///
/// **Private** - shared by both writers
fn open_output(path: &Path) -> Result<BufWriter<File>, OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(BufWriter::new(File::create(path)?))
}
