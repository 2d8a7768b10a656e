use crate::config::Config;
use crate::github::issues::{RunSummary, SubmissionResult, is_success_status};
use crate::issue::IssueRecord;
use crate::output;
use anyhow::{Context, Result};
use tracing::{debug, warn};

mod headers {
    pub const ACCEPT: &str = "application/vnd.github.v3+json";
    pub const API_VERSION_NAME: &str = "X-GitHub-Api-Version";
    pub const API_VERSION: &str = "2022-11-28";
    pub const USER_AGENT: &str = concat!("issue-import/", env!("CARGO_PKG_VERSION"));
}

/// Creates issues one at a time through the REST API.
pub struct IssueSubmitter {
    client: reqwest::Client,
    api_base_url: String,
    token: String,
}

impl IssueSubmitter {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(headers::USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(IssueSubmitter {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Issue-creation endpoint for `repo` (`owner/name`).
    pub fn issues_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/issues", self.api_base_url, repo)
    }

    /// Submits one record. Never fails: transport errors and rejected
    /// requests are both reported through the returned result.
    pub async fn create_issue(&self, repo: &str, record: IssueRecord) -> SubmissionResult {
        let url = self.issues_url(repo);
        debug!(%url, title = %record.title, labels = ?record.labels, "Creating issue");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", headers::ACCEPT)
            .header(headers::API_VERSION_NAME, headers::API_VERSION)
            .json(&record)
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(status, title = %record.title, "Received response");
                if is_success_status(status) {
                    return SubmissionResult::from_response(record, status, String::new());
                }
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|e| format!("Failed to read response body: {e}"));
                warn!(status, title = %record.title, "Issue creation rejected");
                SubmissionResult::from_response(record, status, body)
            }
            Err(e) => {
                let message = format!("{:#}", anyhow::Error::new(e));
                warn!(error = %message, title = %record.title, "Issue creation request failed");
                SubmissionResult::from_transport_error(record, message)
            }
        }
    }

    /// Submits `records` in order, printing one line per record, and returns
    /// the tally. Failed records never stop the run; only a failure to write
    /// to `writer` does.
    pub async fn submit_all(
        &self,
        repo: &str,
        records: Vec<IssueRecord>,
        writer: &mut Option<&mut dyn std::io::Write>,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for record in records {
            let result = self.create_issue(repo, record).await;
            output::println(&result.to_string(), writer)?;
            summary.record(&result);
        }

        Ok(summary)
    }
}
