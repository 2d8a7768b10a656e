use serde::Serialize;

/// One issue to create, as parsed from a CSV row.
///
/// Serializes to the exact request payload of the issue-creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRecord {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}
