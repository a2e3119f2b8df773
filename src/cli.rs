// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands, both taking a GitHub username:
// - timeline: every repository, month by month, newest first
// - summary:  totals, repositories per year, top languages
//
// Settings shared by both (token, API URL, timeout, page limit, log level)
// are global flags, so they can go before or after the subcommand.
// =============================================================================

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "repo-timeline",
    version,
    about = "Lay out a GitHub user's repositories on a timeline",
    long_about = "repo-timeline fetches a GitHub user's profile and every public repository, \
                  then shows them month by month along a timeline, with per-year counts and \
                  the most used languages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// GitHub token; without one GitHub allows 60 requests per hour
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API (change it for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,

    /// Stop after this many pages of 100 repositories (default: no limit)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..), global = true)]
    pub max_pages: Option<u32>,

    /// Log filter, e.g. "debug" or "repo_timeline=debug"
    #[arg(long, env = "REPO_TIMELINE_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every repository on a month-by-month timeline
    ///
    /// Example: repo-timeline timeline octocat
    Timeline {
        /// GitHub username (e.g., octocat)
        username: String,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show repository counts per year and the top languages
    ///
    /// Example: repo-timeline summary octocat --json
    Summary {
        /// GitHub username (e.g., octocat)
        username: String,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },
}
