use crate::issue::IssueRecord;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Column positions resolved from the header row.
struct ColumnIndex {
    title: Option<usize>,
    body: Option<usize>,
    labels: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let position = |name: &str| headers.iter().position(|header| header == name);
        ColumnIndex {
            title: position("title"),
            body: position("body"),
            labels: position("labels"),
        }
    }

    fn to_record(&self, row: &csv::StringRecord) -> IssueRecord {
        let cell = |index: Option<usize>| index.and_then(|i| row.get(i)).unwrap_or("");
        IssueRecord {
            title: cell(self.title).trim().to_string(),
            body: cell(self.body).trim().to_string(),
            labels: split_labels(cell(self.labels)),
        }
    }
}

/// Reads every issue record from the CSV file at `path`.
///
/// The whole file is parsed before this returns; the file handle is dropped
/// on return.
pub fn read_issues(path: &Path) -> Result<Vec<IssueRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file '{}'", path.display()))?;
    parse_issues(file).with_context(|| format!("Failed to parse CSV file '{}'", path.display()))
}

/// Parses header-driven CSV content into issue records, preserving row order.
///
/// - Columns are matched by name; their order does not matter and unknown columns are ignored.
/// - A missing `title` or `body` column yields an empty string, a missing `labels` column yields no labels.
/// - Rows shorter or longer than the header are accepted.
pub fn parse_issues<R: Read>(reader: R) -> Result<Vec<IssueRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = ColumnIndex::from_headers(
        csv_reader
            .headers()
            .context("Failed to read CSV header row")?,
    );

    csv_reader
        .records()
        .enumerate()
        .map(|(index, row)| {
            row.map(|row| columns.to_record(&row))
                .with_context(|| format!("Invalid CSV record at row {}", index + 1))
        })
        .collect()
}

/// Splits a comma-separated label cell, trimming each label and dropping empty ones.
pub fn split_labels(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
