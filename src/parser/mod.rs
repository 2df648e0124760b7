//! Scanners for the simulator's free-text benchmark logs.
//!
//! This module handles:
//! - Locating the marked histogram / cache-output sections
//! - Parsing address/count pairs and per-core stat rows
//! - Extracting run parameters from cache-log file names

pub mod cache_stats;
pub mod histogram;

// Re-export main types
pub use cache_stats::{parse_run_params, scan_cache_log, RunParams, StatRow};
pub use histogram::{scan_histogram_log, Section};
