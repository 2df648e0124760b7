//! Scanner for program-counter histogram dumps.
//!
//! A benchmark log interleaves free text with histogram sections. One
//! marker line opens histogram mode; after that, every `Size, ...`
//! header starts a new section and every other non-empty line is an
//! `<hex-address>, <decimal-count>` pair belonging to the most recent
//! section.

use crate::utils::config::{
    ADDRESS_MASK, FIELD_SEPARATOR, HISTOGRAM_MARKER, MASK_THRESHOLD, SECTION_HEADER_FIELD,
};
use crate::utils::error::ParseError;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::io::BufRead;

/// One histogram dump: masked address -> sample count.
pub type Section = BTreeMap<u32, u64>;

/// Scan a benchmark log and collect its histogram sections in order.
///
/// **Public** - main entry point for histogram parsing
///
/// The marker line switches the scanner into data mode and data mode is
/// never left again: the simulator prints nothing but histogram dumps
/// after the marker, so everything that follows is treated as section
/// data. Empty lines inside data mode are skipped.
///
/// # Arguments
/// * `reader` - buffered reader over the raw log text
///
/// # Returns
/// Sections in encounter order; each is a masked-address -> count map
///
/// # Errors
/// * `ParseError::DataBeforeSection` - pair line before any `Size` header
/// * `ParseError::MalformedLine` - data line without two fields
/// * `ParseError::InvalidAddress` / `ParseError::InvalidCount` - bad numbers
pub fn scan_histogram_log<R: BufRead>(reader: R) -> Result<Vec<Section>, ParseError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut in_data = false;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim_end_matches('\r');

        if in_data {
            if line.is_empty() {
                continue;
            }
            parse_data_line(line, line_no, &mut sections)?;
        } else if line == HISTOGRAM_MARKER {
            debug!("Histogram marker found at line {}", line_no);
            in_data = true;
        }
    }

    if !in_data {
        warn!("No histogram marker found; input produced no sections");
    }

    debug!("Scanned {} histogram sections", sections.len());
    Ok(sections)
}

/// Handle one line inside data mode: section header or address pair.
///
/// **Private** - internal helper for scan_histogram_log
fn parse_data_line(
    line: &str,
    line_no: usize,
    sections: &mut Vec<Section>,
) -> Result<(), ParseError> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let first = fields.next().unwrap_or("");

    if first == SECTION_HEADER_FIELD {
        sections.push(Section::new());
        return Ok(());
    }

    let count_text = fields.next().ok_or_else(|| ParseError::MalformedLine {
        line: line_no,
        text: line.to_string(),
    })?;

    let address = parse_address(first).ok_or_else(|| ParseError::InvalidAddress {
        line: line_no,
        value: first.to_string(),
    })?;

    let count: u64 = count_text
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidCount {
            line: line_no,
            value: count_text.to_string(),
        })?;

    let section = sections
        .last_mut()
        .ok_or(ParseError::DataBeforeSection { line: line_no })?;

    // Colliding masked addresses accumulate instead of overwriting, so
    // no sample is lost when two kernel addresses share a bucket.
    *section.entry(mask_address(address)).or_insert(0) += count;

    Ok(())
}

/// Parse a hex address with or without a `0x` prefix.
///
/// **Private** - internal utility
fn parse_address(text: &str) -> Option<u32> {
    let digits = text
        .trim()
        .strip_prefix("0x")
        .or_else(|| text.trim().strip_prefix("0X"))
        .unwrap_or_else(|| text.trim());
    u32::from_str_radix(digits, 16).ok()
}

/// Collapse kernel-space addresses into their shared bucket.
///
/// Only addresses strictly above the threshold are masked; user-space
/// program counters keep their exact value.
///
/// **Public** - the aggregation key rule, also exercised by tests
pub fn mask_address(address: u32) -> u32 {
    if address > MASK_THRESHOLD {
        address & ADDRESS_MASK
    } else {
        address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan(text: &str) -> Vec<Section> {
        scan_histogram_log(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_no_marker_yields_no_sections() {
        let sections = scan("Size, 100\n0x1000, 5\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn test_single_section() {
        let log = ">>>>>PC_HISTORGRAM<<<<<\nSize, 2\n0x1000, 5\n0x2000, 7\n";
        let sections = scan(log);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0][&0x1000], 5);
        assert_eq!(sections[0][&0x2000], 7);
    }

    #[test]
    fn test_multiple_sections_stay_ordered() {
        let log = ">>>>>PC_HISTORGRAM<<<<<\nSize, 1\n0x1000, 5\nSize, 1\n0x1000, 3\n";
        let sections = scan(log);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0][&0x1000], 5);
        assert_eq!(sections[1][&0x1000], 3);
    }

    #[test]
    fn test_data_mode_never_resets() {
        // A second marker line is not a valid pair, so hitting one while
        // already in data mode must abort rather than re-arm the scanner.
        let log = ">>>>>PC_HISTORGRAM<<<<<\nSize, 1\n0x10, 1\n>>>>>PC_HISTORGRAM<<<<<\n";
        assert!(scan_histogram_log(Cursor::new(log)).is_err());
    }

    #[test]
    fn test_text_before_marker_ignored() {
        let log = "booting core 0\nnot, a, histogram\n>>>>>PC_HISTORGRAM<<<<<\nSize, 1\n0x80, 9\n";
        let sections = scan(log);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0][&0x80], 9);
    }

    #[test]
    fn test_mask_applies_above_threshold() {
        assert_eq!(mask_address(0x8000_0001), 0x8000_0001 & 0xFFF0_0FFF);
        assert_eq!(mask_address(0x8000_0000), 0x8000_0000); // not strictly above
        assert_eq!(mask_address(0x0000_1000), 0x0000_1000);
    }

    #[test]
    fn test_masked_collision_sums_within_section() {
        // 0x800ff000 and 0x80011000 both mask to 0x80000000.
        let log = ">>>>>PC_HISTORGRAM<<<<<\nSize, 2\n0x800ff000, 4\n0x80011000, 6\n";
        let sections = scan(log);
        assert_eq!(sections[0][&0x8000_0000], 10);
    }

    #[test]
    fn test_pair_before_size_header_is_fatal() {
        let log = ">>>>>PC_HISTORGRAM<<<<<\n0x1000, 5\n";
        let err = scan_histogram_log(Cursor::new(log)).unwrap_err();
        assert!(matches!(err, ParseError::DataBeforeSection { line: 2 }));
    }

    #[test]
    fn test_bad_count_is_fatal() {
        let log = ">>>>>PC_HISTORGRAM<<<<<\nSize, 1\n0x1000, five\n";
        let err = scan_histogram_log(Cursor::new(log)).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCount { .. }));
    }

    #[test]
    fn test_address_without_prefix_parses() {
        let log = ">>>>>PC_HISTORGRAM<<<<<\nSize, 1\ndeadbeef, 1\n";
        let sections = scan(log);
        assert_eq!(sections[0][&(0xdeadbeef & 0xFFF0_0FFF)], 1);
    }
}
