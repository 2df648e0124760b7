//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while scanning benchmark log text
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error while reading log: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: invalid hex address '{value}'")]
    InvalidAddress { line: usize, value: String },

    #[error("line {line}: invalid count '{value}'")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: data line before any 'Size' section header")]
    DataBeforeSection { line: usize },

    #[error("line {line}: expected '<hex-address>, <count>', got '{text}'")]
    MalformedLine { line: usize, text: String },

    #[error("stat row field {index} is not an integer: '{value}'")]
    InvalidStatField { index: usize, value: String },

    #[error("stat row has {found} fields, need at least {needed}")]
    TooFewStatFields { needed: usize, found: usize },

    #[error("file name '{0}' does not match '*-<scheme>-<size>-*'")]
    BadRunFileName(String),
}

/// Errors that can occur while combining parsed data
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("group (scheme {scheme}, size {size}) has zero read+write accesses, miss rate undefined")]
    NoAccesses { scheme: u32, size: u64 },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
