//! Run configuration sourced from the CI environment.
//!
//! The environment is read once, in `main`. Everything below the command
//! layer receives these values explicitly.

use std::env;

pub const PIPELINE_ID_VAR: &str = "CI_PIPELINE_ID";
pub const COMMIT_SHA_VAR: &str = "CI_COMMIT_SHA";
pub const BRANCH_VAR: &str = "CI_COMMIT_REF_NAME";
pub const WEBHOOK_URL_VAR: &str = "SLACK_WEBHOOK_URL";
pub const PIPELINE_NAME_VAR: &str = "PIPELINE_NAME";

/// Used for the HTML title and the notification footer.
pub const DEFAULT_PIPELINE_NAME: &str = "Android DevOps Pipeline";

/// Identifying metadata stamped onto every report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunMetadata {
    pub pipeline_id: Option<String>,
    pub commit_sha: Option<String>,
    pub branch: Option<String>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub metadata: RunMetadata,

    /// Default Slack webhook when none is passed to the notifier
    pub webhook_url: Option<String>,

    pub pipeline_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metadata: RunMetadata::default(),
            webhook_url: None,
            pipeline_name: DEFAULT_PIPELINE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            metadata: RunMetadata {
                pipeline_id: get(PIPELINE_ID_VAR),
                commit_sha: get(COMMIT_SHA_VAR),
                branch: get(BRANCH_VAR),
            },
            webhook_url: get(WEBHOOK_URL_VAR),
            pipeline_name: get(PIPELINE_NAME_VAR)
                .unwrap_or_else(|| DEFAULT_PIPELINE_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_ci_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("CI_PIPELINE_ID", "4242"),
            ("CI_COMMIT_SHA", "0123456789abcdef"),
            ("CI_COMMIT_REF_NAME", "main"),
            ("SLACK_WEBHOOK_URL", "https://hooks.example.com/T000"),
        ]));

        assert_eq!(config.metadata.pipeline_id.as_deref(), Some("4242"));
        assert_eq!(config.metadata.commit_sha.as_deref(), Some("0123456789abcdef"));
        assert_eq!(config.metadata.branch.as_deref(), Some("main"));
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://hooks.example.com/T000")
        );
        assert_eq!(config.pipeline_name, DEFAULT_PIPELINE_NAME);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = Config::from_lookup(lookup_from(&[
            ("SLACK_WEBHOOK_URL", "  "),
            ("CI_COMMIT_SHA", ""),
            ("PIPELINE_NAME", "Nightly"),
        ]));

        assert!(config.webhook_url.is_none());
        assert!(config.metadata.commit_sha.is_none());
        assert_eq!(config.pipeline_name, "Nightly");
    }
}
