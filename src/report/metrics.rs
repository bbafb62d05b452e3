use super::types::{Report, Summary};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const METRICS_FILE: &str = "pipeline_metrics.json";

/// Snapshot exported for the Grafana dashboard.
///
/// Only the success rate is computed here; the other fields are left for
/// external producers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub pipeline_success_rate: f64,
    pub test_coverage: f64,
    pub performance_regression: bool,
    pub security_score: f64,
    pub build_duration: f64,
}

impl DashboardMetrics {
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            pipeline_success_rate: summary.success_rate(),
            ..Self::default()
        }
    }
}

/// Compute metrics for `report`, write them to `pipeline_metrics.json` in
/// `output_dir` and return them.
pub fn write_metrics(report: &Report, output_dir: &Path) -> Result<DashboardMetrics> {
    let metrics = DashboardMetrics::from_summary(&report.summary);
    let path = output_dir.join(METRICS_FILE);

    let json = serde_json::to_string_pretty(&metrics)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(metrics)
}
