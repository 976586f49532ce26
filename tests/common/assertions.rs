//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::app::CliOutput;

/// Assert the command exited successfully
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.success,
        "Expected success. stdout: {} stderr: {}",
        output.stdout, output.stderr
    );
}

/// Assert the command failed with a message containing `needle`
pub fn assert_failure_contains(output: &CliOutput, needle: &str) {
    assert!(!output.success, "Expected failure, got stdout: {}", output.stdout);
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to contain {needle:?}, got: {}",
        output.stderr
    );
}

/// Assert a float is within `tolerance` of `expected`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Expected {expected} +/- {tolerance}, got {actual}"
    );
}

/// Assert stdout is exactly one line
pub fn assert_single_line(output: &CliOutput, expected: &str) {
    assert_success(output);
    assert_eq!(output.stdout.trim_end(), expected);
}
