//! Webhook delivery of the condensed pipeline summary.

pub mod slack;

use crate::report::Report;
use colored::Colorize;
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Result of a delivery attempt. None of these abort the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    /// No webhook URL was configured
    Skipped,
    /// Endpoint answered with a status other than 200
    Rejected(u16),
    /// Transport-level failure
    Failed(String),
}

pub struct Notifier {
    client: Client,
    default_webhook: Option<String>,
    footer: String,
}

impl Notifier {
    pub fn new(default_webhook: Option<String>, footer: impl Into<String>) -> Self {
        Self::with_client(Client::new(), default_webhook, footer)
    }

    pub fn with_client(
        client: Client,
        default_webhook: Option<String>,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            client,
            default_webhook,
            footer: footer.into(),
        }
    }

    /// Post the report summary to `webhook_url`, or to the configured
    /// default. A single attempt, no retries.
    pub fn send(&self, report: &Report, webhook_url: Option<&str>) -> NotifyOutcome {
        let Some(url) = webhook_url.or(self.default_webhook.as_deref()) else {
            log::warn!("No Slack webhook URL provided");
            return NotifyOutcome::Skipped;
        };

        let message = slack::build_message(report, &self.footer, chrono::Utc::now().timestamp());

        match self.client.post(url).json(&message).send() {
            Ok(response) if response.status() == StatusCode::OK => {
                println!("{} Slack notification sent successfully", "✅".green());
                NotifyOutcome::Sent
            }
            Ok(response) => {
                let status = response.status().as_u16();
                log::error!("Failed to send Slack notification: {}", status);
                NotifyOutcome::Rejected(status)
            }
            Err(e) => {
                log::error!("Error sending Slack notification: {}", e);
                NotifyOutcome::Failed(e.to_string())
            }
        }
    }
}
