//! Scanner for per-core cache statistics logs.
//!
//! Each simulation run writes one log whose file name encodes the run
//! parameters (`<bench>-<partition scheme>-<cache size>-<tag>`). Inside
//! the log, a marker line opens the cache output section; `I$`/`D$`
//! lines delimit the per-cache blocks and every other line in the
//! section is one statistics row for the core the last `I$` line
//! introduced.

use crate::utils::config::{CACHE_OUTPUT_MARKER, DCACHE_PREFIX, ICACHE_PREFIX};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::io::BufRead;
use std::path::Path;

/// Run parameters recovered from a cache-log file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
    /// Cache partitioning scheme the run was simulated under
    pub partition_scheme: u32,

    /// Cache size parameter (number of sets) of the run
    pub cache_size: u64,
}

/// One captured statistics row, tagged with its run and core.
#[derive(Debug, Clone)]
pub struct StatRow {
    /// Partition scheme from the file name
    pub partition_scheme: u32,

    /// Cache size from the file name
    pub cache_size: u64,

    /// Zero-based core the row belongs to (-1 if no `I$` line preceded it)
    pub core_id: i64,

    /// The raw stat line: `<cache name>, <counter>, <counter>, ...`
    pub line: String,
}

/// Extract run parameters from a cache-log path.
///
/// **Public** - called once per input file
///
/// Only the final path component is split, so hyphens in parent
/// directories cannot shift the fields.
///
/// # Arguments
/// * `path` - path to the run log
///
/// # Returns
/// Partition scheme (field 1) and cache size (field 2)
///
/// # Errors
/// * `ParseError::BadRunFileName` - missing or non-integer fields
pub fn parse_run_params(path: &Path) -> Result<RunParams, ParseError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let bad = || ParseError::BadRunFileName(name.clone());

    let mut fields = name.split('-');
    let _bench = fields.next().ok_or_else(bad)?;
    let partition_scheme = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
    let cache_size = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;

    Ok(RunParams {
        partition_scheme,
        cache_size,
    })
}

/// Scan one run log and capture its per-core statistics rows.
///
/// **Public** - main entry point for cache-log parsing
///
/// The core index starts at -1 and advances on every `I$` line, whether
/// or not the output section has started, so delimiter lines printed
/// during warm-up still count. Rows are only captured once the marker
/// line has been seen; the marker itself and the `I$`/`D$` delimiters
/// are never captured.
///
/// # Arguments
/// * `reader` - buffered reader over the raw log text
/// * `params` - run parameters stamped onto every captured row
///
/// # Returns
/// Captured rows in file order
pub fn scan_cache_log<R: BufRead>(
    reader: R,
    params: RunParams,
) -> std::io::Result<Vec<StatRow>> {
    let mut rows = Vec::new();
    let mut core_id: i64 = -1;
    let mut in_section = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.starts_with(ICACHE_PREFIX) {
            core_id += 1;
        }

        if in_section && !line.starts_with(ICACHE_PREFIX) && !line.starts_with(DCACHE_PREFIX) {
            rows.push(StatRow {
                partition_scheme: params.partition_scheme,
                cache_size: params.cache_size,
                core_id,
                line: line.to_string(),
            });
        }

        if line == CACHE_OUTPUT_MARKER {
            in_section = true;
        }
    }

    if !in_section {
        warn!(
            "No cache output marker found (scheme {}, size {}); file contributed no rows",
            params.partition_scheme, params.cache_size
        );
    }

    debug!(
        "Captured {} stat rows across {} cores (scheme {}, size {})",
        rows.len(),
        core_id + 1,
        params.partition_scheme,
        params.cache_size
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PARAMS: RunParams = RunParams {
        partition_scheme: 1,
        cache_size: 64,
    };

    #[test]
    fn test_parse_run_params() {
        let params = parse_run_params(Path::new("out/bitcount-2-128-warm.log")).unwrap();
        assert_eq!(params.partition_scheme, 2);
        assert_eq!(params.cache_size, 128);
    }

    #[test]
    fn test_parse_run_params_hyphen_in_directory() {
        let params = parse_run_params(Path::new("run-a/aes-1-64-x")).unwrap();
        assert_eq!(params.partition_scheme, 1);
        assert_eq!(params.cache_size, 64);
    }

    #[test]
    fn test_parse_run_params_rejects_non_integer() {
        assert!(parse_run_params(Path::new("aes-big-64-x")).is_err());
        assert!(parse_run_params(Path::new("nodashes")).is_err());
    }

    #[test]
    fn test_rows_before_marker_are_dropped() {
        let log = "I$ core 0\nL1$, 1, 2\n>>>>>CACHE_OUTPUT<<<<<\nL1$, 3, 4\n";
        let rows = scan_cache_log(Cursor::new(log), PARAMS).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, "L1$, 3, 4");
    }

    #[test]
    fn test_core_index_counts_premarker_delimiters() {
        let log = "I$ warm\n>>>>>CACHE_OUTPUT<<<<<\nI$ core\nstats, 1\n";
        let rows = scan_cache_log(Cursor::new(log), PARAMS).unwrap();
        assert_eq!(rows[0].core_id, 1);
    }

    #[test]
    fn test_delimiter_lines_not_captured() {
        let log = ">>>>>CACHE_OUTPUT<<<<<\nI$ core 0\nD$ core 0\nstats, 1\n";
        let rows = scan_cache_log(Cursor::new(log), PARAMS).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].core_id, 0);
    }

    #[test]
    fn test_row_before_any_icache_line_gets_minus_one() {
        let log = ">>>>>CACHE_OUTPUT<<<<<\nstats, 1\n";
        let rows = scan_cache_log(Cursor::new(log), PARAMS).unwrap();
        assert_eq!(rows[0].core_id, -1);
    }
}
