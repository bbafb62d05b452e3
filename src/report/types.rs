use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Placeholder rendered for identifying metadata the CI did not provide
pub const UNKNOWN: &str = "unknown";

/// Number of commit hash characters shown in rendered output
pub const SHORT_SHA_LEN: usize = 8;

/// Outcome of a single JUnit test case
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Error,
    Skipped,
}

/// Normalized test case record, in document order
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TestCase {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub classname: Option<String>,
    #[serde(default)]
    pub time: f64,
    pub status: TestStatus,
    #[serde(default)]
    pub failure: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// `failure` is written for failed cases and `error` for errored ones, as
// `null` when the element had no text. Other cases carry neither key.
impl Serialize for TestCase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let with_failure = self.status == TestStatus::Failed;
        let with_error = self.status == TestStatus::Error;
        let len = 4 + usize::from(with_failure) + usize::from(with_error);

        let mut state = serializer.serialize_struct("TestCase", len)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("classname", &self.classname)?;
        state.serialize_field("time", &self.time)?;
        state.serialize_field("status", &self.status)?;
        if with_failure {
            state.serialize_field("failure", &self.failure)?;
        }
        if with_error {
            state.serialize_field("error", &self.error)?;
        }
        state.end()
    }
}

/// Unit test category, filled from a JUnit XML report
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnitTestResults {
    pub test_count: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
    pub time: f64,
    pub test_cases: Vec<TestCase>,
}

/// Integration test category, filled from a device-test orchestrator log
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntegrationTestResults {
    pub total_tests: u64,
    pub passed: u64,
    pub failed: u64,
    /// The log format carries no per-test detail, so this stays empty.
    pub test_cases: Vec<TestCase>,
}

/// Performance category: app startup samples in milliseconds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceResults {
    pub startup_times: Vec<i64>,
    pub memory_usage: BTreeMap<String, serde_json::Value>,
    pub cpu_usage: BTreeMap<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_startup_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_startup_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_startup_time: Option<i64>,
}

impl PerformanceResults {
    /// Build results from samples, deriving statistics when any exist.
    pub fn from_samples(startup_times: Vec<i64>) -> Self {
        let mut results = Self {
            startup_times,
            ..Self::default()
        };

        if !results.startup_times.is_empty() {
            let sum: f64 = results.startup_times.iter().map(|&t| t as f64).sum();
            results.avg_startup_time = Some(sum / results.startup_times.len() as f64);
            results.max_startup_time = results.startup_times.iter().copied().max();
            results.min_startup_time = results.startup_times.iter().copied().min();
        }

        results
    }
}

/// Per-category result slots. An empty slot serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TestCategories {
    #[serde(default, with = "empty_slot")]
    pub unit_tests: Option<UnitTestResults>,
    #[serde(default, with = "empty_slot")]
    pub integration_tests: Option<IntegrationTestResults>,
    #[serde(default, with = "empty_slot")]
    pub performance_tests: Option<PerformanceResults>,
    /// No parser fills this slot; external producers may.
    #[serde(default, with = "empty_slot")]
    pub security_tests: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Running counters across categories.
///
/// `passed + failed + skipped == total_tests` is not guaranteed: no merge
/// formula touches `skipped`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Summary {
    pub total_tests: u64,
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub duration: f64,
}

impl Summary {
    /// Percentage of passed tests, 0 when nothing ran
    pub fn success_rate(&self) -> f64 {
        if self.total_tests > 0 {
            self.passed as f64 / self.total_tests as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Root aggregate persisted as the per-artifact and consolidated report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub timestamp: String,
    #[serde(default)]
    pub pipeline_id: Option<String>,
    #[serde(default)]
    pub commit_sha: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub tests: TestCategories,
    #[serde(default)]
    pub summary: Summary,
}

impl Report {
    pub fn pipeline_id_or_unknown(&self) -> &str {
        self.pipeline_id.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn branch_or_unknown(&self) -> &str {
        self.branch.as_deref().unwrap_or(UNKNOWN)
    }

    /// First eight characters of the commit hash, or `unknown`
    pub fn short_commit(&self) -> String {
        match self.commit_sha.as_deref() {
            Some(sha) => sha.chars().take(SHORT_SHA_LEN).collect(),
            None => UNKNOWN.to_string(),
        }
    }
}

/// Serde adapter mapping `None` to `{}` and `{}` (or `null`) back to `None`.
mod empty_slot {
    use serde::de::{DeserializeOwned, Error as _};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            _ => T::deserialize(value).map(Some).map_err(D::Error::custom),
        }
    }
}
