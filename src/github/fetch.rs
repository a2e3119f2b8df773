// src/github/fetch.rs
// =============================================================================
// This module fetches a user's profile and their complete repository list.
//
// Strategy:
// - Ask for repositories sorted by creation date, newest first, 100 per page
// - Keep asking for the next page while pages come back full (exactly 100)
// - Stop at the first short page (including an empty one)
// - Run every item through the validator before keeping it
//
// Failure policy:
// - No retries. One bad page or one bad item fails the whole call, and
//   whatever was collected before is dropped with it
// - Pages are fetched one after another, never in parallel, so a single call
//   has at most one request in flight
//
// Rust concepts:
// - Generics with trait bounds: RepoFetcher<A: GitHubApi> works with the real
//   HTTP client and with the fake one in the tests
// - The ? operator: converts ValidationError into FetchError automatically
//   (thanks to #[from] in error.rs)
// =============================================================================

use tracing::{debug, info, warn};

use super::api::GitHubApi;
use super::error::FetchError;
use super::models::{Repository, User};
use super::validate::{validate_repository, validate_user, ValidationError};

/// GitHub's maximum page size for repository listings
pub const PAGE_SIZE: usize = 100;

pub struct RepoFetcher<A> {
    api: A,
    max_pages: Option<u32>,
}

impl<A: GitHubApi> RepoFetcher<A> {
    /// A fetcher with no page limit.
    pub fn new(api: A) -> Self {
        RepoFetcher {
            api,
            max_pages: None,
        }
    }

    /// Caps how many repository pages one call may request.
    ///
    /// Hitting the cap is not an error: the pages fetched so far are returned
    /// and a warning is logged.
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetches and validates one user profile (a single request).
    pub async fn fetch_user(&self, username: &str) -> Result<User, FetchError> {
        debug!(username, "fetching user profile");
        let body = self.api.get_user(username).await?;
        let user = validate_user(&body)?;
        Ok(user)
    }

    /// Fetches every repository of `username`, newest first.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        // Local to this call: an early return drops everything collected so far
        let mut repos = Vec::new();
        let mut page: u32 = 1;

        loop {
            debug!(username, page, "fetching repository page");
            let body = self.api.list_repos_page(username, page, PAGE_SIZE).await?;

            let items = body.as_array().ok_or(ValidationError::NotAnArray {
                record: "repository page",
            })?;

            for item in items {
                repos.push(validate_repository(item)?);
            }

            if items.len() != PAGE_SIZE {
                break;
            }

            if let Some(max_pages) = self.max_pages {
                if page >= max_pages {
                    warn!(
                        username,
                        max_pages,
                        fetched = repos.len(),
                        "page limit reached, repository list may be incomplete"
                    );
                    break;
                }
            }

            page += 1;
        }

        info!(username, pages = page, count = repos.len(), "fetched repositories");
        Ok(repos)
    }

    /// Fetches the profile and the repositories side by side.
    ///
    /// Fails with whichever error shows up first.
    pub async fn fetch_timeline(
        &self,
        username: &str,
    ) -> Result<(User, Vec<Repository>), FetchError> {
        futures::try_join!(self.fetch_user(username), self.fetch_user_repos(username))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the page loop a plain `loop` and not a stream?
//    - Page N+1 depends on how many items page N had
//    - Only one request is in flight at a time, so there is nothing to
//      run concurrently inside a single call
//
// 2. What does futures::try_join! do?
//    - Polls both futures on the current task until both finish
//    - Returns early with the first Err, dropping the other future
//    - Nothing is spawned, so the futures can borrow &self
//
// 3. Why is PAGE_SIZE a usize and page a u32?
//    - PAGE_SIZE is compared against Vec::len(), which is usize
//    - Page numbers go into the query string and never get near u32::MAX
// -----------------------------------------------------------------------------
