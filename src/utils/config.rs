//! Configuration and constants for the CLI.

/// Marker line that opens the histogram section of a benchmark log.
///
/// The misspelling matches the simulator's emitter; do not "fix" it or
/// the scanner will never find the section.
pub const HISTOGRAM_MARKER: &str = ">>>>>PC_HISTORGRAM<<<<<";

/// Marker line that opens the cache statistics section of a run log.
pub const CACHE_OUTPUT_MARKER: &str = ">>>>>CACHE_OUTPUT<<<<<";

/// Prefix of an instruction-cache delimiter line. Each occurrence
/// advances the running core index.
pub const ICACHE_PREFIX: &str = "I$";

/// Prefix of a data-cache delimiter line (excluded from stat rows).
pub const DCACHE_PREFIX: &str = "D$";

/// First field of a histogram section header line.
pub const SECTION_HEADER_FIELD: &str = "Size";

// Addresses above this threshold are kernel-space aliases whose middle
// bits vary per run; the mask collapses them into one bucket.
pub const MASK_THRESHOLD: u32 = 0x8000_0000;
pub const ADDRESS_MASK: u32 = 0xFFF0_0FFF;

/// Field separator used throughout the simulator's CSV-ish log lines.
pub const FIELD_SEPARATOR: &str = ", ";

/// Header of the aggregated cache statistics CSV.
pub const CACHE_CSV_HEADER: &str = "partition scheme, cache sets, core id, cache name, \
bytes read, bytes written, read accesses, write accesses, read misses, write misses, \
writebacks, miss rate, read misses in LLC, write misses in LLC, total miss rate";

/// Partition scheme id whose logs carry last-level-cache miss fields.
pub const LLC_PARTITION_SCHEME: u32 = 1;

// Field positions within a prefixed stat row
// (scheme, size, core id, cache name, then the counters).
pub const FIELD_BYTES_READ: usize = 4;
pub const FIELD_BYTES_WRITTEN: usize = 5;
pub const FIELD_READ_ACCESSES: usize = 6;
pub const FIELD_WRITE_ACCESSES: usize = 7;
pub const FIELD_READ_MISSES: usize = 8;
pub const FIELD_WRITE_MISSES: usize = 9;
pub const FIELD_WRITEBACKS: usize = 10;
pub const FIELD_LLC_READ_MISSES: usize = 12;
pub const FIELD_LLC_WRITE_MISSES: usize = 13;
