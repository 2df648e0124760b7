//! Simlog Studio
//!
//! CSV aggregation for simulator benchmark logs.
//!
//! This crate provides the core implementation for the
//! `simlog` CLI tool:
//! - merging program-counter histogram dumps into one table
//! - summing per-core cache statistics across simulation runs
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install simlog-studio
//! simlog --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
