// src/report.rs
// =============================================================================
// Everything the user actually sees: the text timeline, the summary card,
// JSON output, and the wording for each kind of fetch error.
//
// Text output is built into a String first and printed by main.rs. That keeps
// these functions easy to test.
//
// Timeline layout (cards alternate around a vertical spine):
//
//                           ● Jan 2024
//                           ├─ newest-repo · Rust · 2024-01-20
//  older-repo · 2024-01-02 ─┤
// =============================================================================

use serde::Serialize;
use std::fmt::Write;

use crate::github::{FetchError, Repository, User};
use crate::timeline::{MonthGroup, Side, Summary};

// Where the spine sits, in characters from the left edge
const COLUMN: usize = 38;

/// JSON shape of the `timeline` command
#[derive(Debug, Serialize)]
pub struct TimelineReport<'a> {
    pub user: &'a User,
    pub months: Vec<MonthGroup<'a>>,
}

/// JSON shape of the `summary` command
#[derive(Debug, Serialize)]
pub struct SummaryReport<'a> {
    pub user: &'a User,
    #[serde(flatten)]
    pub summary: Summary,
}

/// User-facing message for a failed fetch.
pub fn error_message(username: &str, error: &FetchError) -> String {
    match error {
        FetchError::NotFound => format!(
            "User \"{}\" not found. Please check the username and try again.",
            username
        ),
        FetchError::RateLimited => {
            "API rate limit exceeded. Please try again later (or set GITHUB_TOKEN).".to_string()
        }
        FetchError::ApiError { .. } => "Failed to fetch data. Please try again.".to_string(),
        FetchError::MalformedResponse(_) | FetchError::Unexpected(_) => {
            "An unexpected error occurred. Please try again.".to_string()
        }
    }
}

/// One-line description of a repository, as it appears on a card.
fn card_text(repo: &Repository) -> String {
    let mut text = repo.name.clone();
    if let Some(language) = &repo.language {
        text.push_str(" · ");
        text.push_str(language);
    }
    if repo.fork {
        text.push_str(" [fork]");
    }
    if repo.archived {
        text.push_str(" [archived]");
    }
    text.push_str(" · ");
    text.push_str(&repo.created_at.format("%Y-%m-%d").to_string());
    text
}

// Keeps left-hand cards from pushing the spine out of line
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

fn profile_header(out: &mut String, user: &User) {
    let title = match &user.name {
        Some(name) => format!("{} (@{})", name, user.login),
        None => format!("@{}", user.login),
    };
    writeln!(out, "{}", title).ok();
    writeln!(out, "{}", user.html_url).ok();
}

/// Renders the month-grouped timeline as text.
pub fn render_timeline(user: &User, months: &[MonthGroup]) -> String {
    let mut out = String::new();

    profile_header(&mut out, user);
    writeln!(out, "A chronological view of {}'s repositories", user.login).ok();
    writeln!(out).ok();

    for month in months {
        writeln!(out, "{:width$}● {}", "", month.label, width = COLUMN).ok();
        for (rank, repo) in month.ranked() {
            let card = card_text(repo);
            let line = match Side::for_rank(rank) {
                Side::Right => format!("{:width$}├─ {}", "", card, width = COLUMN),
                Side::Left => format!(
                    "{:>width$} ─┤",
                    truncate(&card, COLUMN - 2),
                    width = COLUMN - 2
                ),
            };
            writeln!(out, "{}", line).ok();
        }
    }

    out
}

/// Renders the summary card as text.
pub fn render_summary(user: &User, summary: &Summary) -> String {
    let mut out = String::new();

    profile_header(&mut out, user);
    writeln!(out, "{} public repositories on profile", user.public_repos).ok();
    writeln!(out).ok();

    writeln!(
        out,
        "Total repositories: {} ({} forks, {} archived)",
        summary.total, summary.forks, summary.archived
    )
    .ok();

    writeln!(out).ok();
    writeln!(out, "By year").ok();
    for entry in &summary.per_year {
        writeln!(out, "  {:<6} {:>4}", entry.year, entry.count).ok();
    }

    if !summary.top_languages.is_empty() {
        writeln!(out).ok();
        writeln!(out, "Top languages").ok();
        let width = summary
            .top_languages
            .iter()
            .map(|l| l.language.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &summary.top_languages {
            writeln!(out, "  {:<width$} {:>4}", entry.language, entry.count, width = width).ok();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ValidationError;
    use crate::timeline::{group_by_month, summarize};
    use chrono::{DateTime, Utc};

    fn user() -> User {
        User {
            login: "octocat".into(),
            id: 1,
            avatar_url: "https://avatars.githubusercontent.com/u/1".into(),
            html_url: "https://github.com/octocat".into(),
            name: Some("The Octocat".into()),
            public_repos: 3,
        }
    }

    fn repo(id: u64, name: &str, created_at: &str, language: Option<&str>) -> Repository {
        let created_at: DateTime<Utc> = created_at.parse().unwrap();
        Repository {
            id,
            name: name.into(),
            full_name: format!("octocat/{name}"),
            html_url: format!("https://github.com/octocat/{name}"),
            description: None,
            created_at,
            updated_at: created_at,
            pushed_at: created_at,
            language: language.map(str::to_string),
            fork: false,
            archived: false,
            disabled: false,
            private: false,
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            error_message("ghost", &FetchError::NotFound),
            "User \"ghost\" not found. Please check the username and try again."
        );
        assert!(error_message("x", &FetchError::RateLimited).starts_with("API rate limit exceeded"));
        assert_eq!(
            error_message("x", &FetchError::ApiError { status: 500 }),
            "Failed to fetch data. Please try again."
        );
        let malformed = FetchError::MalformedResponse(ValidationError::NotAnObject { record: "user" });
        assert_eq!(
            error_message("x", &malformed),
            "An unexpected error occurred. Please try again."
        );
    }

    #[test]
    fn test_timeline_alternates_sides() {
        let repos = vec![
            repo(1, "newest", "2024-01-20T00:00:00Z", Some("Rust")),
            repo(2, "older", "2024-01-02T00:00:00Z", None),
            repo(3, "oldest", "2023-06-01T00:00:00Z", Some("Go")),
        ];
        let months = group_by_month(&repos);

        let text = render_timeline(&user(), &months);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "The Octocat (@octocat)");
        assert!(lines.iter().any(|l| l.ends_with("● Jan 2024")));
        assert!(lines.iter().any(|l| l.ends_with("├─ newest · Rust · 2024-01-20")));
        assert!(lines.iter().any(|l| l.ends_with("older · 2024-01-02 ─┤")));
        assert!(lines.iter().any(|l| l.ends_with("├─ oldest · Go · 2023-06-01")));
    }

    #[test]
    fn test_long_left_card_is_truncated() {
        let long = "a".repeat(80);
        let repos = vec![
            repo(1, "first", "2024-01-20T00:00:00Z", None),
            repo(2, &long, "2024-01-02T00:00:00Z", None),
        ];
        let months = group_by_month(&repos);

        let text = render_timeline(&user(), &months);
        let left = text.lines().find(|l| l.ends_with("─┤")).unwrap();

        // The spine lines up with the right-hand cards
        assert_eq!(left.chars().count(), COLUMN + 1);
        assert!(left.contains('…'));
    }

    #[test]
    fn test_summary_text() {
        let repos = vec![
            repo(1, "a", "2024-01-20T00:00:00Z", Some("Rust")),
            repo(2, "b", "2023-01-02T00:00:00Z", Some("Rust")),
            repo(3, "c", "2023-06-01T00:00:00Z", None),
        ];

        let text = render_summary(&user(), &summarize(&repos));

        assert!(text.contains("Total repositories: 3 (0 forks, 0 archived)"));
        assert!(text.contains("  2024      1"));
        assert!(text.contains("  2023      2"));
        assert!(text.contains("Top languages\n  Rust    2"));
    }

    #[test]
    fn test_summary_json_is_flat() {
        let repos = vec![repo(1, "a", "2024-01-20T00:00:00Z", Some("Rust"))];
        let u = user();
        let report = SummaryReport {
            user: &u,
            summary: summarize(&repos),
        };

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["user"]["login"], "octocat");
        assert_eq!(value["total"], 1);
        assert_eq!(value["top_languages"][0]["language"], "Rust");
    }
}
