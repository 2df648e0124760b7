//! Group cache stat rows and compute per-group totals.
//!
//! Rows from every input file are pooled by (partition scheme, cache
//! size); each group is summed into one `Total` row with derived miss
//! rates. Only partition scheme 1 logs carry last-level-cache miss
//! counters, so LLC sums exist for that scheme alone.

use crate::parser::cache_stats::StatRow;
use crate::utils::config::{
    FIELD_BYTES_READ, FIELD_BYTES_WRITTEN, FIELD_LLC_READ_MISSES, FIELD_LLC_WRITE_MISSES,
    FIELD_READ_ACCESSES, FIELD_READ_MISSES, FIELD_SEPARATOR, FIELD_WRITEBACKS,
    FIELD_WRITE_ACCESSES, FIELD_WRITE_MISSES, LLC_PARTITION_SCHEME,
};
use crate::utils::error::{AggregateError, ParseError};
use log::debug;
use std::collections::BTreeMap;

/// Summed counters and derived rates for one (scheme, size) group.
///
/// **Public** - one output CSV row
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    /// Partition scheme of the group
    pub partition_scheme: u32,

    /// Cache size (sets) of the group
    pub cache_size: u64,

    pub bytes_read: u64,
    pub bytes_written: u64,
    pub read_accesses: u64,
    pub write_accesses: u64,
    pub read_misses: u64,
    pub write_misses: u64,
    pub writebacks: u64,

    /// (read misses + write misses) / (read + write accesses)
    pub miss_rate: f64,

    /// LLC miss sums; zero outside partition scheme 1
    pub llc_read_misses: u64,
    pub llc_write_misses: u64,

    /// Miss rate with LLC misses included in the numerator; equals
    /// `miss_rate` outside partition scheme 1
    pub total_miss_rate: f64,
}

/// Pool rows by (partition scheme, cache size).
///
/// **Public** - first aggregation stage
///
/// The BTreeMap key order gives the output ordering for free: scheme
/// ascending, then cache size ascending.
pub fn group_rows(rows: Vec<StatRow>) -> BTreeMap<(u32, u64), Vec<StatRow>> {
    let mut groups: BTreeMap<(u32, u64), Vec<StatRow>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.partition_scheme, row.cache_size))
            .or_default()
            .push(row);
    }
    groups
}

/// Summarize every group in output order.
///
/// **Public** - second aggregation stage
///
/// # Errors
/// Propagates the first field-parse or zero-access error; the run
/// aborts rather than emitting a partial summary.
pub fn summarize_groups(
    groups: &BTreeMap<(u32, u64), Vec<StatRow>>,
) -> Result<Vec<GroupTotal>, AggregateError> {
    groups
        .iter()
        .map(|(&(scheme, size), rows)| summarize_group(scheme, size, rows))
        .collect()
}

/// Sum one group's counters and derive its miss rates.
///
/// **Public** - exercised directly by tests
///
/// # Arguments
/// * `scheme` / `size` - the group key
/// * `rows` - every captured row of the group, across all input files
///
/// # Returns
/// One total row; rates are computed over the group sums, never per line
///
/// # Errors
/// * `AggregateError::Parse` - a counter field is missing or non-numeric
/// * `AggregateError::NoAccesses` - zero read+write accesses in the group
pub fn summarize_group(
    scheme: u32,
    size: u64,
    rows: &[StatRow],
) -> Result<GroupTotal, AggregateError> {
    let mut total = GroupTotal {
        partition_scheme: scheme,
        cache_size: size,
        bytes_read: 0,
        bytes_written: 0,
        read_accesses: 0,
        write_accesses: 0,
        read_misses: 0,
        write_misses: 0,
        writebacks: 0,
        miss_rate: 0.0,
        llc_read_misses: 0,
        llc_write_misses: 0,
        total_miss_rate: 0.0,
    };

    for row in rows {
        // Rebuild the prefixed field list so the positions match the
        // output CSV columns: scheme, size, core id, then the raw line.
        let mut fields: Vec<String> = vec![
            row.partition_scheme.to_string(),
            row.cache_size.to_string(),
            row.core_id.to_string(),
        ];
        fields.extend(row.line.split(FIELD_SEPARATOR).map(str::to_string));

        total.bytes_read += parse_field(&fields, FIELD_BYTES_READ)?;
        total.bytes_written += parse_field(&fields, FIELD_BYTES_WRITTEN)?;
        total.read_accesses += parse_field(&fields, FIELD_READ_ACCESSES)?;
        total.write_accesses += parse_field(&fields, FIELD_WRITE_ACCESSES)?;
        total.read_misses += parse_field(&fields, FIELD_READ_MISSES)?;
        total.write_misses += parse_field(&fields, FIELD_WRITE_MISSES)?;
        total.writebacks += parse_field(&fields, FIELD_WRITEBACKS)?;

        if scheme == LLC_PARTITION_SCHEME {
            total.llc_read_misses += parse_field(&fields, FIELD_LLC_READ_MISSES)?;
            total.llc_write_misses += parse_field(&fields, FIELD_LLC_WRITE_MISSES)?;
        }
    }

    let accesses = total.read_accesses + total.write_accesses;
    if accesses == 0 {
        return Err(AggregateError::NoAccesses {
            scheme,
            size,
        });
    }

    let misses = total.read_misses + total.write_misses;
    total.miss_rate = misses as f64 / accesses as f64;
    total.total_miss_rate = if scheme == LLC_PARTITION_SCHEME {
        (misses + total.llc_read_misses + total.llc_write_misses) as f64 / accesses as f64
    } else {
        total.miss_rate
    };

    debug!(
        "Group ({}, {}): {} rows, {} accesses, miss rate {}",
        scheme,
        size,
        rows.len(),
        accesses,
        total.miss_rate
    );

    Ok(total)
}

/// Parse one integer counter out of a prefixed field list.
///
/// **Private** - internal helper for summarize_group
fn parse_field(fields: &[String], index: usize) -> Result<u64, ParseError> {
    let value = fields.get(index).ok_or(ParseError::TooFewStatFields {
        needed: index + 1,
        found: fields.len(),
    })?;
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidStatField {
            index,
            value: value.clone(),
        })
}
