use super::types::Report;
use crate::error::{ReportError, Result};
use std::path::Path;

/// Write the report as pretty-printed JSON, overwriting any existing file
pub fn save(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|e| ReportError::io(path, e))?;
    log::debug!("Report written to {}", path.display());
    Ok(())
}

/// Load a previously saved report
pub fn load(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Per-artifact output name: the file name up to its first `.`, plus
/// `-report.json`.
pub fn artifact_report_name(artifact: &Path) -> String {
    let file_name = artifact
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    format!("{}-report.json", stem)
}
