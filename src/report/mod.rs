pub mod aggregate;
pub mod html;
pub mod json;
pub mod metrics;
pub mod types;

pub use types::Report;

/// Consolidated report consumed by `--send-to-slack`
pub const FINAL_REPORT_FILE: &str = "final-pipeline-report.json";
