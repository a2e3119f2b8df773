// src/github/models.rs
// =============================================================================
// The two records we read from the GitHub REST API.
//
// Only the fields the timeline needs are modelled; GitHub sends many more and
// serde ignores them. Values of these types only come out of the validator
// (see validate.rs), so everything else in the app can trust them.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One GitHub repository as returned by `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    /// Primary language as detected by GitHub (None for empty repos)
    pub language: Option<String>,
    pub fork: bool,
    pub archived: bool,
    pub disabled: bool,
    pub private: bool,
}

/// One GitHub account as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,
    /// Display name, if the user set one
    pub name: Option<String>,
    pub public_repos: u64,
}
