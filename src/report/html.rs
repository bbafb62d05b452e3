use super::types::Report;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

pub const HTML_FILE: &str = "final-pipeline-report.html";

/// Render the report page and write it to `final-pipeline-report.html`
pub fn write_html(report: &Report, pipeline_name: &str, output_dir: &Path) -> Result<PathBuf> {
    let html = render_html(report, pipeline_name);
    let path = output_dir.join(HTML_FILE);

    std::fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{} HTML report generated: {}",
        "📊".to_string().blue(),
        path.display().to_string().cyan()
    );

    Ok(path)
}

/// Fixed-layout summary page. Individual test cases are not rendered.
pub fn render_html(report: &Report, pipeline_name: &str) -> String {
    let summary = &report.summary;
    let success_rate = format!("{:.1}", summary.success_rate());
    let title = html_escape(pipeline_name);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .header {{ background: #2196F3; color: white; padding: 20px; border-radius: 5px; }}
        .summary {{ display: flex; gap: 20px; margin: 20px 0; }}
        .metric {{ background: #f5f5f5; padding: 15px; border-radius: 5px; flex: 1; }}
        .passed {{ border-left: 5px solid #4CAF50; }}
        .failed {{ border-left: 5px solid #f44336; }}
        .test-details {{ margin: 20px 0; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
        th {{ background-color: #f2f2f2; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>🚀 {title} Report</h1>
        <p>Pipeline ID: {pipeline_id} | Branch: {branch} | Commit: {commit_sha}</p>
        <p>Generated: {timestamp}</p>
    </div>

    <div class="summary">
        <div class="metric passed">
            <h3>✅ Passed Tests</h3>
            <h2>{passed}</h2>
        </div>
        <div class="metric failed">
            <h3>❌ Failed Tests</h3>
            <h2>{failed}</h2>
        </div>
        <div class="metric">
            <h3>⏱️ Duration</h3>
            <h2>{duration}s</h2>
        </div>
        <div class="metric">
            <h3>📊 Success Rate</h3>
            <h2>{success_rate}%</h2>
        </div>
    </div>

    <div class="test-details">
        <h2>📱 Test Results Details</h2>
        <!-- Test details would be inserted here -->
    </div>
</body>
</html>
"#,
        title = title,
        pipeline_id = html_escape(report.pipeline_id_or_unknown()),
        branch = html_escape(report.branch_or_unknown()),
        commit_sha = html_escape(&report.short_commit()),
        timestamp = html_escape(&report.timestamp),
        passed = summary.passed,
        failed = summary.failed,
        duration = summary.duration,
        success_rate = success_rate,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
