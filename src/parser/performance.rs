// Performance log parser
// Collects app startup times from `TotalTime:` lines (am start -W output).

use crate::error::{ReportError, Result};
use crate::report::types::PerformanceResults;
use std::path::Path;

pub const TOTAL_TIME_MARKER: &str = "TotalTime:";

/// Parse a performance log file from disk
pub fn parse_performance_log(path: &Path) -> Result<PerformanceResults> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    parse_performance_str(&content)
}

/// Parse performance log content. A non-integer sample fails the whole log.
pub fn parse_performance_str(content: &str) -> Result<PerformanceResults> {
    let mut samples = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if !line.contains(TOTAL_TIME_MARKER) {
            continue;
        }

        // Value sits between the first colon and the next one
        let raw = line.split(':').nth(1).unwrap_or_default().trim();
        let value = raw.parse::<i64>().map_err(|_| ReportError::InvalidSample {
            line: idx + 1,
            value: raw.to_string(),
        })?;
        samples.push(value);
    }

    Ok(PerformanceResults::from_samples(samples))
}
