use crate::cli;
use crate::config::Config;
use crate::csv_parser;
use crate::github::issues::RunSummary;
use crate::github::submit::IssueSubmitter;
use crate::output;
use std::path::Path;

const SEPARATOR_WIDTH: usize = 50;

/// Runs one import end to end.
///
/// Configuration problems (arguments, token, missing or empty CSV) are
/// returned as errors before any request is made. Per-record failures are
/// only counted in the returned summary.
pub async fn run<F>(
    args: Vec<String>,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
    env: F,
) -> anyhow::Result<RunSummary>
where
    F: Fn(&str) -> Option<String>,
{
    let (csv_path, repo) = match cli::parser::parse_args(&args) {
        cli::parser::Command::Import { csv_path, repo } => (csv_path, repo),
        cli::parser::Command::Invalid(message) => return Err(anyhow::Error::msg(message)),
    };

    let config = Config::from_env(env)?;

    let csv_path = Path::new(&csv_path);
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("File '{}' not found", csv_path.display()));
    }

    let issues = csv_parser::read_issues(csv_path)?;
    if issues.is_empty() {
        return Err(anyhow::anyhow!(
            "No issues found in '{}'",
            csv_path.display()
        ));
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    output::println(
        &format!("Found {} issues to import to {}", issues.len(), repo),
        &mut stdout_additional,
    )?;
    output::println(&separator, &mut stdout_additional)?;

    let submitter = IssueSubmitter::new(&config)?;
    let summary = submitter
        .submit_all(&repo, issues, &mut stdout_additional)
        .await?;

    output::println(&separator, &mut stdout_additional)?;
    output::println(&summary.to_string(), &mut stdout_additional)?;

    Ok(summary)
}
