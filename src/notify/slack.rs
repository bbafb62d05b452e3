use crate::report::Report;
use serde::Serialize;

pub const COLOR_SUCCESS: &str = "good";
pub const COLOR_FAILURE: &str = "danger";

/// Incoming-webhook payload with a single attachment
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlackMessage {
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Attachment {
    pub color: String,
    pub title: String,
    pub fields: Vec<Field>,
    pub footer: String,
    pub ts: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Field {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// Condense a report into a Slack attachment. Green when nothing failed.
pub fn build_message(report: &Report, footer: &str, ts: i64) -> SlackMessage {
    let summary = &report.summary;
    let color = if summary.failed == 0 {
        COLOR_SUCCESS
    } else {
        COLOR_FAILURE
    };

    SlackMessage {
        attachments: vec![Attachment {
            color: color.to_string(),
            title: format!("🚀 Pipeline Results - {}", report.branch_or_unknown()),
            fields: vec![
                Field {
                    title: "Tests".to_string(),
                    value: format!(
                        "✅ {} passed\n❌ {} failed\n⏭️ {} skipped",
                        summary.passed, summary.failed, summary.skipped
                    ),
                    short: true,
                },
                Field {
                    title: "Pipeline".to_string(),
                    value: format!(
                        "📊 Pipeline ID: {}\n🔗 Commit: {}",
                        report.pipeline_id_or_unknown(),
                        report.short_commit()
                    ),
                    short: true,
                },
            ],
            footer: footer.to_string(),
            ts,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::RunMetadata;

    fn report(failed: u64) -> Report {
        let mut report = Report::new(&RunMetadata {
            pipeline_id: Some("777".to_string()),
            commit_sha: Some("fedcba9876543210".to_string()),
            branch: Some("release/2.1".to_string()),
        });
        report.summary.total_tests = 10;
        report.summary.passed = 10 - failed;
        report.summary.failed = failed;
        report
    }

    #[test]
    fn test_build_message_success() {
        let message = build_message(&report(0), "Android DevOps Pipeline", 1_700_000_000);
        let attachment = &message.attachments[0];

        assert_eq!(attachment.color, "good");
        assert_eq!(attachment.title, "🚀 Pipeline Results - release/2.1");
        assert_eq!(
            attachment.fields[0].value,
            "✅ 10 passed\n❌ 0 failed\n⏭️ 0 skipped"
        );
        assert_eq!(
            attachment.fields[1].value,
            "📊 Pipeline ID: 777\n🔗 Commit: fedcba98"
        );
        assert_eq!(attachment.footer, "Android DevOps Pipeline");
        assert_eq!(attachment.ts, 1_700_000_000);
    }

    #[test]
    fn test_build_message_failure_color() {
        let message = build_message(&report(2), "CI", 0);
        assert_eq!(message.attachments[0].color, "danger");
    }

    #[test]
    fn test_missing_commit_renders_unknown() {
        let mut report = report(0);
        report.commit_sha = None;
        let message = build_message(&report, "CI", 0);
        assert!(message.attachments[0].fields[1]
            .value
            .ends_with("Commit: unknown"));
    }

    #[test]
    fn test_payload_shape() {
        let json = serde_json::to_value(build_message(&report(1), "CI", 42)).unwrap();
        assert_eq!(json["attachments"][0]["fields"][0]["short"], true);
        assert_eq!(json["attachments"][0]["ts"], 42);
    }
}
