// src/logging.rs
// =============================================================================
// Sets up tracing so the fetcher's debug!/info!/warn! calls go somewhere.
//
// Logs go to stderr. stdout is reserved for the timeline itself, so
// `repo-timeline timeline octocat --json | jq` keeps working with logging on.
//
// The level string is a normal tracing filter: "debug", "warn",
// "repo_timeline=debug,reqwest=info", and so on.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level '{}'", level))?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}
