// Device-test orchestrator log parser
// Counts "Test results for ..." lines; the log has no per-test structure.

use crate::error::{ReportError, Result};
use crate::report::types::IntegrationTestResults;
use std::path::Path;

pub const RESULT_MARKER: &str = "Test results for";
pub const PASS_TOKEN: &str = "OK";
pub const FAIL_TOKEN: &str = "FAILURES";

/// Classification of a single log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Not a result line
    NotResult,
    Passed,
    Failed,
    /// Result line carrying neither token; counts toward the total only
    Unclassified,
}

/// Classify one line. `OK` is checked before `FAILURES`, so a line
/// carrying both tokens counts as passed.
pub fn classify_line(line: &str) -> LineClass {
    if !line.contains(RESULT_MARKER) {
        LineClass::NotResult
    } else if line.contains(PASS_TOKEN) {
        LineClass::Passed
    } else if line.contains(FAIL_TOKEN) {
        LineClass::Failed
    } else {
        LineClass::Unclassified
    }
}

/// Parse a device-test log file from disk
pub fn parse_device_log(path: &Path) -> Result<IntegrationTestResults> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    Ok(parse_device_log_str(&content))
}

pub fn parse_device_log_str(content: &str) -> IntegrationTestResults {
    let mut results = IntegrationTestResults::default();

    for line in content.lines() {
        match classify_line(line) {
            LineClass::NotResult => continue,
            LineClass::Passed => results.passed += 1,
            LineClass::Failed => results.failed += 1,
            LineClass::Unclassified => {}
        }
        results.total_tests += 1;
    }

    results
}
