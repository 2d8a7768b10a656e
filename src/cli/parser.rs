/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Import { csv_path: String, repo: String },
    Invalid(String),
}

pub const USAGE: &str = "Usage: issue-import <csv-file> <owner/repo>\n\
Example: issue-import issues.csv octocat/hello-world";

const HELP_FLAGS: &[&str] = &["help", "-h", "--help"];

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command. Arguments past the repository are ignored.
///   A lone help flag yields the usage text as `Invalid`; with two or more
///   arguments the first one is always the CSV path, even if it reads `help`.
pub fn parse_args(args: &[String]) -> Command {
    match args {
        [_, flag] if HELP_FLAGS.contains(&flag.as_str()) => Command::Invalid(USAGE.to_string()),
        [_, csv_path, repo, ..] => {
            if is_valid_repo(repo) {
                Command::Import {
                    csv_path: csv_path.clone(),
                    repo: repo.clone(),
                }
            } else {
                Command::Invalid(format!(
                    "Invalid repository format '{repo}'. Please use <owner>/<repo>."
                ))
            }
        }
        _ => Command::Invalid(format!("Missing required arguments\n{USAGE}")),
    }
}

/// `owner/repo` with both parts non-empty and exactly one slash.
fn is_valid_repo(repo: &str) -> bool {
    match repo.split_once('/') {
        Some((owner, name)) => !owner.is_empty() && !name.is_empty() && !name.contains('/'),
        None => false,
    }
}
