// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and build the GitHub client from the config
// 3. Fetch the user's profile and repositories
// 4. Group them and print either text or JSON
// 5. Exit with proper code (0 = success, 1 = fetch failed, 2 = error)
//
// Rust concepts used:
// - async/await: the profile and the repository pages come over the network
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - validated settings + HTTP client
mod github;        // src/github/ - GitHub API access, validation, pagination
mod logging;       // src/logging.rs - tracing setup
mod report;        // src/report.rs - text/JSON output
mod timeline;      // src/timeline/ - grouping and statistics

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use github::{FetchError, HttpApi, RepoFetcher, Repository, User};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Setup problems (bad flags, bad URL, client build failure)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = printed a timeline or summary
//   Ok(1) = GitHub request failed
//   Ok(2) = bad input
//   Err   = setup failed
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init_tracing(&cli.log_level)?;

    let config = Config::from_cli(&cli)?;
    tracing::debug!(api_url = %config.api_url, authenticated = config.token.is_some(), "configuration loaded");

    let client = config.build_client()?;
    let fetcher = RepoFetcher::new(HttpApi::new(client, config.api_url.clone()))
        .with_max_pages(config.max_pages);

    match cli.command {
        Commands::Timeline { username, json } => {
            handle_timeline(&fetcher, &username, json).await
        }
        Commands::Summary { username, json } => {
            handle_summary(&fetcher, &username, json).await
        }
    }
}

// Trims the username and fetches everything, printing the error message
// ourselves so the caller only has to pick an exit code.
async fn load(
    fetcher: &RepoFetcher<HttpApi>,
    username: &str,
) -> std::result::Result<(User, Vec<Repository>), i32> {
    let username = username.trim();
    if username.is_empty() {
        eprintln!("Error: username must not be empty");
        return Err(2);
    }

    match fetcher.fetch_timeline(username).await {
        Ok(data) => Ok(data),
        Err(e) => {
            log_fetch_error(&e);
            eprintln!("{}", report::error_message(username, &e));
            Err(1)
        }
    }
}

fn log_fetch_error(error: &FetchError) {
    match error.status() {
        Some(status) => tracing::error!(status, error = %error, "GitHub request failed"),
        None => tracing::error!(error = %error, "GitHub request failed"),
    }
}

// Handles the 'timeline' subcommand
async fn handle_timeline(
    fetcher: &RepoFetcher<HttpApi>,
    username: &str,
    json: bool,
) -> Result<i32> {
    let (user, repos) = match load(fetcher, username).await {
        Ok(data) => data,
        Err(code) => return Ok(code),
    };

    let months = timeline::group_by_month(&repos);

    if json {
        let report = report::TimelineReport {
            user: &user,
            months,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if repos.is_empty() {
        println!("No repositories found");
        println!("{} hasn't created any public repositories yet.", user.login);
    } else {
        print!("{}", report::render_timeline(&user, &months));
    }

    Ok(0)
}

// Handles the 'summary' subcommand
async fn handle_summary(
    fetcher: &RepoFetcher<HttpApi>,
    username: &str,
    json: bool,
) -> Result<i32> {
    let (user, repos) = match load(fetcher, username).await {
        Ok(data) => data,
        Err(code) => return Ok(code),
    };

    let summary = timeline::summarize(&repos);

    if json {
        let report = report::SummaryReport {
            user: &user,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report::render_summary(&user, &summary));
    }

    Ok(0)
}
