//! Artifact parsers, one per supported input format.

pub mod device_log;
pub mod junit;
pub mod performance;

use std::path::Path;

/// Artifact format, chosen from the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// JUnit XML report (unit tests)
    JUnit,
    /// Startup-time log (performance tests)
    Performance,
    /// Device-test orchestrator log (integration tests)
    DeviceLog,
}

impl ArtifactKind {
    /// `.xml` suffix wins, then `performance` anywhere in the path.
    pub fn detect(path: &Path) -> Self {
        let path = path.to_string_lossy();
        if path.ends_with(".xml") {
            ArtifactKind::JUnit
        } else if path.contains("performance") {
            ArtifactKind::Performance
        } else {
            ArtifactKind::DeviceLog
        }
    }

    /// Report slot this kind of artifact fills
    pub fn category(&self) -> &'static str {
        match self {
            ArtifactKind::JUnit => "unit_tests",
            ArtifactKind::Performance => "performance_tests",
            ArtifactKind::DeviceLog => "integration_tests",
        }
    }
}
