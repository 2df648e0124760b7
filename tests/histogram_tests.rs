//! End-to-end tests for the histogram command: log file in, CSV out.

use pretty_assertions::assert_eq;
use simlog_studio::commands::{execute_histogram, HistogramArgs};
use std::path::Path;
use tempfile::tempdir;

fn run(log: &str) -> String {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bench.log");
    let output = dir.path().join("hist.csv");
    std::fs::write(&input, log).unwrap();

    execute_histogram(HistogramArgs {
        input,
        output: output.clone(),
    })
    .unwrap();

    read(&output)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_two_sections_one_address() {
    let log = "\
boot message\n\
>>>>>PC_HISTORGRAM<<<<<\n\
Size, 1\n\
0x1000, 5\n\
Size, 1\n\
0x1000, 3\n";

    assert_eq!(run(log), "0x1000, 5, 3, 8\n");
}

#[test]
fn test_sparse_addresses_zero_filled_both_ways() {
    let log = "\
>>>>>PC_HISTORGRAM<<<<<\n\
Size, 1\n\
0x1000, 5\n\
Size, 2\n\
0x1000, 1\n\
0x2000, 2\n\
Size, 1\n\
0x2000, 4\n";

    // 0x1000 misses the last section, 0x2000 misses the first.
    assert_eq!(run(log), "0x1000, 5, 1, 0, 6\n0x2000, 0, 2, 4, 6\n");
}

#[test]
fn test_rows_sorted_by_numeric_address() {
    let log = "\
>>>>>PC_HISTORGRAM<<<<<\n\
Size, 3\n\
0xff, 1\n\
0x9, 1\n\
0x100, 1\n";

    // 0x9 < 0xff < 0x100 numerically; a string sort would disagree.
    assert_eq!(run(log), "0x9, 1, 1\n0xff, 1, 1\n0x100, 1, 1\n");
}

#[test]
fn test_kernel_addresses_collapse_into_one_row() {
    // Both mask to 0x80000000 under 0xFFF00FFF; counts sum per section.
    let log = "\
>>>>>PC_HISTORGRAM<<<<<\n\
Size, 2\n\
0x800ff000, 4\n\
0x80011000, 6\n\
Size, 1\n\
0x800ff000, 1\n";

    assert_eq!(run(log), "0x80000000, 10, 1, 11\n");
}

#[test]
fn test_text_before_marker_is_ignored() {
    let log = "\
core 0: hello\n\
Size, 1\n\
0xdead, 99\n\
>>>>>PC_HISTORGRAM<<<<<\n\
Size, 1\n\
0x10, 1\n";

    // The pre-marker Size/pair lines must not leak into the table.
    assert_eq!(run(log), "0x10, 1, 1\n");
}

#[test]
fn test_log_without_marker_writes_empty_csv() {
    assert_eq!(run("just some text\n"), "");
}

#[test]
fn test_malformed_pair_aborts() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bench.log");
    let output = dir.path().join("hist.csv");
    std::fs::write(&input, ">>>>>PC_HISTORGRAM<<<<<\nSize, 1\n0x10, many\n").unwrap();

    let result = execute_histogram(HistogramArgs {
        input,
        output: output.clone(),
    });

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file_aborts() {
    let dir = tempdir().unwrap();
    let result = execute_histogram(HistogramArgs {
        input: dir.path().join("absent.log"),
        output: dir.path().join("hist.csv"),
    });
    assert!(result.is_err());
}
