use super::types::{
    IntegrationTestResults, PerformanceResults, Report, Summary, TestCategories,
    UnitTestResults,
};
use crate::error::Result;
use crate::parser::{device_log, junit, performance, ArtifactKind};
use crate::utils::config::RunMetadata;
use std::path::Path;

impl Report {
    /// Fresh report: empty slots, zero summary, stamped with the current time
    pub fn new(metadata: &RunMetadata) -> Self {
        Self {
            timestamp: chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string(),
            pipeline_id: metadata.pipeline_id.clone(),
            commit_sha: metadata.commit_sha.clone(),
            branch: metadata.branch.clone(),
            tests: TestCategories::default(),
            summary: Summary::default(),
        }
    }

    /// Attach JUnit results. Failures and errors both count as failed.
    pub fn record_unit(&mut self, results: UnitTestResults) {
        let summary = &mut self.summary;
        let failed = results.failures.saturating_add(results.errors);
        summary.total_tests = summary.total_tests.saturating_add(results.test_count);
        summary.passed = summary
            .passed
            .saturating_add(results.test_count.saturating_sub(failed));
        summary.failed = summary.failed.saturating_add(failed);
        self.tests.unit_tests = Some(results);
    }

    pub fn record_integration(&mut self, results: IntegrationTestResults) {
        let summary = &mut self.summary;
        summary.total_tests = summary.total_tests.saturating_add(results.total_tests);
        summary.passed = summary.passed.saturating_add(results.passed);
        summary.failed = summary.failed.saturating_add(results.failed);
        self.tests.integration_tests = Some(results);
    }

    /// Performance samples are metrics only and leave the summary untouched.
    pub fn record_performance(&mut self, results: PerformanceResults) {
        self.tests.performance_tests = Some(results);
    }

    /// Parse one artifact and merge it into this report.
    ///
    /// Parse failures are logged and leave the category slot empty.
    /// Returns whether the artifact was merged.
    pub fn ingest(&mut self, kind: ArtifactKind, path: &Path) -> bool {
        log::debug!("Parsing {} as {:?}", path.display(), kind);

        let merged = match kind {
            ArtifactKind::JUnit => junit::parse_junit_xml(path).map(|r| self.record_unit(r)),
            ArtifactKind::DeviceLog => {
                device_log::parse_device_log(path).map(|r| self.record_integration(r))
            }
            ArtifactKind::Performance => {
                performance::parse_performance_log(path).map(|r| self.record_performance(r))
            }
        };

        report_parse_outcome(kind, path, merged)
    }
}

fn report_parse_outcome(kind: ArtifactKind, path: &Path, outcome: Result<()>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            log::error!(
                "Error parsing {} ({}): {}",
                path.display(),
                kind.category(),
                e
            );
            false
        }
    }
}
