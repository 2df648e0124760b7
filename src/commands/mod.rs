//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod cache_stats;
pub mod histogram;

// Re-export main command functions
pub use cache_stats::{execute_cache_stats, CacheStatsArgs};
pub use histogram::{execute_histogram, HistogramArgs};
