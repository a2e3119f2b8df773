// src/github/api.rs
// =============================================================================
// The two GitHub REST endpoints we use, behind a trait.
//
// Endpoints:
// - GET /users/{username}
// - GET /users/{username}/repos?sort=created&direction=desc&per_page=N&page=P
//
// The trait returns raw serde_json::Value on purpose: shape checking is the
// validator's job, and the fetcher runs it on every payload. Tests swap in a
// fake implementation so pagination can be exercised without a network.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use super::error::FetchError;

/// Raw access to the GitHub REST API.
///
/// Implementations classify HTTP failures with [`FetchError::from_status`]
/// and everything else as [`FetchError::Unexpected`].
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /users/{username}`
    async fn get_user(&self, username: &str) -> Result<Value, FetchError>;

    /// One page of `GET /users/{username}/repos`, newest first. Pages start at 1.
    async fn list_repos_page(
        &self,
        username: &str,
        page: u32,
        per_page: usize,
    ) -> Result<Value, FetchError>;
}

/// The real thing, over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    pub fn new(client: Client, base: Url) -> Self {
        HttpApi { client, base }
    }

    // Appends path segments to the base URL, percent-encoding each one.
    // A username like "a/b" stays one segment instead of changing the route.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Unexpected(format!("API URL cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_status(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Unexpected(format!("invalid JSON body: {}", e)))
    }
}

#[async_trait]
impl GitHubApi for HttpApi {
    async fn get_user(&self, username: &str) -> Result<Value, FetchError> {
        let url = self.endpoint(&["users", username])?;
        self.get_json(url).await
    }

    async fn list_repos_page(
        &self,
        username: &str,
        page: u32,
        per_page: usize,
    ) -> Result<Value, FetchError> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "created")
            .append_pair("direction", "desc")
            .append_pair("per_page", &per_page.to_string())
            .append_pair("page", &page.to_string());
        self.get_json(url).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[async_trait]?
//    - It rewrites `async fn` in a trait into methods returning boxed futures
//    - The boxed futures are Send, which is why the trait requires Send + Sync
//
// 2. Why percent-encode the username?
//    - Url::path_segments_mut().extend() escapes '/', '?', '#' and friends
//    - Without it, a username like "a/b" would change which endpoint we hit
// -----------------------------------------------------------------------------
