// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - api: the raw endpoints, behind the GitHubApi trait
// - validate: shape checks for untrusted JSON
// - fetch: user profile + paginated repository listing
// - models: the User and Repository records
// - error: the error kinds a fetch can end in
// =============================================================================

mod api;
mod error;
mod fetch;
mod models;
mod validate;

pub use api::HttpApi;
pub use error::FetchError;
pub use fetch::RepoFetcher;
pub use models::{Repository, User};

#[cfg(test)]
pub use validate::ValidationError;
