//! Combine per-section histograms into one table.
//!
//! Every address that appears in any section gets one row; columns are
//! the sections in encounter order, zero-filled where the address was
//! absent (leading and trailing gaps alike).

use crate::parser::histogram::Section;
use log::debug;
use std::collections::BTreeMap;

/// The merged histogram: address -> one count per section.
///
/// **Public** - produced by build_combined_table, consumed by CSV output
#[derive(Debug, Clone, Default)]
pub struct CombinedTable {
    /// Number of sections in the source log
    pub section_count: usize,

    /// Per-address counts; every vector has `section_count` entries.
    /// BTreeMap keeps the rows in ascending address order.
    pub rows: BTreeMap<u32, Vec<u64>>,
}

impl CombinedTable {
    /// Row total across all sections for one address
    ///
    /// **Public** - the trailing CSV column
    pub fn row_total(&self, address: u32) -> u64 {
        self.rows
            .get(&address)
            .map(|counts| counts.iter().sum())
            .unwrap_or(0)
    }
}

/// Merge ordered sections into the combined table.
///
/// **Public** - main entry point for histogram aggregation
///
/// # Arguments
/// * `sections` - sections in encounter order, from the scanner
///
/// # Returns
/// Combined table where every row has exactly `sections.len()` columns
pub fn build_combined_table(sections: &[Section]) -> CombinedTable {
    let mut rows: BTreeMap<u32, Vec<u64>> = BTreeMap::new();

    for (index, section) in sections.iter().enumerate() {
        for (&address, &count) in section {
            let counts = rows.entry(address).or_default();
            // Zero-fill sections this address skipped.
            counts.resize(index, 0);
            counts.push(count);
        }
    }

    // Addresses absent from the tail sections still need full rows.
    for counts in rows.values_mut() {
        counts.resize(sections.len(), 0);
    }

    debug!(
        "Combined {} sections into {} address rows",
        sections.len(),
        rows.len()
    );

    CombinedTable {
        section_count: sections.len(),
        rows,
    }
}
