use anyhow::{Context, Result};
use std::time::Duration;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";
/// Environment variable overriding the per-request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "ISSUE_IMPORT_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Where users can create a personal access token.
pub const TOKEN_DOCS_URL: &str = "https://github.com/settings/tokens";

/// Settings for talking to the issue tracker, resolved once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub token: String,
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Builds the configuration from an environment lookup.
    ///
    /// `lookup` returns the value of a variable, or `None` if unset. Pass
    /// `|key| std::env::var(key).ok()` for the process environment.
    ///
    /// - Returns an `Err` if the token is unset or empty. The token is used verbatim.
    /// - Returns an `Err` if the timeout is set but is not a positive integer.
    /// - Unset or blank optional variables fall back to their defaults.
    pub fn from_env<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = lookup(TOKEN_ENV)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "{TOKEN_ENV} environment variable not set\nGet your token at: {TOKEN_DOCS_URL}"
                )
            })?;

        let api_base_url = non_blank(API_URL_ENV)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match non_blank(TIMEOUT_ENV) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Config {
            token,
            api_base_url,
            timeout,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .parse()
        .with_context(|| format!("{TIMEOUT_ENV} must be a number of seconds, got '{raw}'"))?;
    if secs == 0 {
        return Err(anyhow::anyhow!("{TIMEOUT_ENV} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
