//! Output writers for aggregated CSV data.
//!
//! This module handles writing the two result tables to disk:
//! - Combined histogram CSV (one row per address)
//! - Cache statistics summary CSV (one `Total` row per group)

pub mod csv;

// Re-export main functions
pub use csv::{write_cache_csv, write_histogram_csv};
