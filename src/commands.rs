//! The three invocation modes, wired from parsers to emitters.

use crate::error::ReportError;
use crate::notify::{Notifier, NotifyOutcome};
use crate::parser::ArtifactKind;
use crate::report::{html, json, metrics, Report, FINAL_REPORT_FILE};
use crate::utils::config::Config;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Parse one artifact into a fresh report and save it as
/// `<stem>-report.json` in `output_dir`.
///
/// Parse errors are logged and produce a report with an empty slot.
pub fn process_artifact(config: &Config, artifact: &Path, output_dir: &Path) -> Result<PathBuf> {
    let kind = ArtifactKind::detect(artifact);
    log::info!(
        "Processing {} as {}",
        artifact.display(),
        kind.category()
    );

    let mut report = Report::new(&config.metadata);
    report.ingest(kind, artifact);

    let output = output_dir.join(json::artifact_report_name(artifact));
    json::save(&report, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!(
        "{} Test report saved: {}",
        "📊".to_string().blue(),
        output.display().to_string().cyan()
    );
    Ok(output)
}

/// Render the HTML page and dashboard metrics, then write the consolidated
/// JSON report. Works from a fresh report, not from earlier artifact files.
pub fn generate_final_report(config: &Config, output_dir: &Path) -> Result<Report> {
    let report = Report::new(&config.metadata);

    html::write_html(&report, &config.pipeline_name, output_dir)?;
    metrics::write_metrics(&report, output_dir)?;

    let output = output_dir.join(FINAL_REPORT_FILE);
    json::save(&report, &output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!("{} Final pipeline report generated", "📊".to_string().blue());
    Ok(report)
}

/// Load the consolidated report from `output_dir` and notify Slack.
///
/// Returns `None` when there is no consolidated report to send.
pub fn send_to_slack(config: &Config, output_dir: &Path) -> Result<Option<NotifyOutcome>> {
    let path = output_dir.join(FINAL_REPORT_FILE);

    let report = match json::load(&path) {
        Ok(report) => report,
        Err(ReportError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            println!("{} No final report found to send to Slack", "❌".red());
            return Ok(None);
        }
        Err(e) => return Err(e).context("Failed to load final pipeline report"),
    };

    let notifier = Notifier::new(config.webhook_url.clone(), config.pipeline_name.as_str());
    Ok(Some(notifier.send(&report, None)))
}
