// src/config.rs
// =============================================================================
// Runtime settings for talking to GitHub.
//
// Everything comes from the command line (see cli.rs). A few flags can also be
// set through environment variables, which clap handles for us:
//   GITHUB_TOKEN      -> --token
//   GITHUB_API_URL    -> --api-url
//   REPO_TIMELINE_LOG -> --log-level
//
// The Config struct is the validated form of those flags, and it knows how to
// build the shared reqwest Client.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

/// Public GitHub REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Per-request timeout when none is given
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every request path is appended to
    pub api_url: Url,
    /// Bearer token; raises the rate limit from 60 to 5000 requests/hour
    pub token: Option<String>,
    pub timeout: Duration,
    /// Upper bound on repository pages (None = keep going until a short page)
    pub max_pages: Option<u32>,
}

impl Config {
    pub fn new(
        api_url: &str,
        token: Option<String>,
        timeout_secs: u64,
        max_pages: Option<u32>,
    ) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .with_context(|| format!("Invalid API URL '{}'", api_url))?;

        // path_segments_mut() only works on http(s)-style URLs
        if !matches!(api_url.scheme(), "http" | "https") || api_url.cannot_be_a_base() {
            return Err(anyhow!("API URL must be http(s): {}", api_url));
        }

        // An exported-but-empty GITHUB_TOKEN means "no token"
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Ok(Config {
            api_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
            max_pages,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Config::new(
            &cli.api_url,
            cli.token.clone(),
            cli.timeout_secs,
            cli.max_pages,
        )
    }

    /// Builds the HTTP client with GitHub's required headers baked in.
    pub fn build_client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("repo-timeline/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("Invalid token value")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = Config::new(DEFAULT_API_URL, None, DEFAULT_TIMEOUT_SECS, None).unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.token.is_none());
        assert!(config.max_pages.is_none());
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let config = Config::new(DEFAULT_API_URL, Some("   ".into()), 10, None).unwrap();
        assert!(config.token.is_none());

        let config = Config::new(DEFAULT_API_URL, Some(" ghp_abc ".into()), 10, None).unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_abc"));
    }

    #[test]
    fn test_rejects_bad_api_urls() {
        assert!(Config::new("not a url", None, 10, None).is_err());
        assert!(Config::new("ftp://example.com", None, 10, None).is_err());
        assert!(Config::new("mailto:someone@example.com", None, 10, None).is_err());
    }

    #[test]
    fn test_builds_client_with_token() {
        let config = Config::new(DEFAULT_API_URL, Some("ghp_abc".into()), 5, Some(3)).unwrap();
        assert!(config.build_client().is_ok());
    }
}
