//! Aggregation of scanned log data into output tables.
//!
//! This module transforms parsed sections and stat rows into:
//! - The combined histogram table (address -> per-section counts)
//! - Per-(scheme, size) cache totals with derived miss rates

pub mod cache_stats;
pub mod histogram;

// Re-export main types and functions
pub use cache_stats::{group_rows, summarize_group, summarize_groups, GroupTotal};
pub use histogram::{build_combined_table, CombinedTable};
