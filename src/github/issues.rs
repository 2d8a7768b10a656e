use crate::issue::IssueRecord;
use std::fmt;

/// Whether the issue-creation endpoint accepted the request.
pub fn is_success_status(status: u16) -> bool {
    matches!(status, 200 | 201)
}

/// Outcome of submitting one record.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub record: IssueRecord,
    pub succeeded: bool,
    /// `None` when no response was received.
    pub status_code: Option<u16>,
    /// Response body or transport error message on failure.
    pub error_detail: Option<String>,
}

impl SubmissionResult {
    /// Classifies an HTTP response. Only 200 and 201 count as success; the
    /// body is kept as diagnostics for anything else.
    pub fn from_response(record: IssueRecord, status: u16, body: String) -> Self {
        let succeeded = is_success_status(status);
        SubmissionResult {
            record,
            succeeded,
            status_code: Some(status),
            error_detail: (!succeeded).then_some(body),
        }
    }

    /// A request that never produced a response (connection refused, timeout, ...).
    pub fn from_transport_error(record: IssueRecord, error: String) -> Self {
        SubmissionResult {
            record,
            succeeded: false,
            status_code: None,
            error_detail: Some(error),
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.succeeded {
            return write!(f, "✓ Created: {}", self.record.title);
        }

        let detail = one_line(self.error_detail.as_deref().unwrap_or(""));
        match self.status_code {
            Some(status) => write!(
                f,
                "✗ Failed: {} (status {}): {}",
                self.record.title, status, detail
            ),
            None => write!(f, "✗ Failed: {} (no response): {}", self.record.title, detail),
        }
    }
}

/// Collapses a multi-line detail so a failure notice stays on one line.
fn one_line(detail: &str) -> String {
    detail
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Running tally of submission outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub success_count: usize,
    pub failed_count: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &SubmissionResult) {
        if result.succeeded {
            self.success_count += 1;
        } else {
            self.failed_count += 1;
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done! {} created, {} failed",
            self.success_count, self.failed_count
        )
    }
}
