// src/github/error.rs
// =============================================================================
// Every way a fetch can fail, as one enum.
//
// The fetcher never builds user-facing text. It hands back one of these kinds
// (plus the HTTP status when there was one) and the CLI decides what to say.
//
// HTTP status codes we care about:
// - 404: the user does not exist
// - 403: GitHub's answer when the rate limit is used up
// - anything else non-2xx: generic API error
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

use super::validate::ValidationError;

#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP 404
    #[error("not found (HTTP 404)")]
    NotFound,

    /// HTTP 403
    #[error("rate limited (HTTP 403)")]
    RateLimited,

    /// Any other non-2xx status
    #[error("GitHub API error (HTTP {status})")]
    ApiError { status: u16 },

    /// The payload did not have the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] ValidationError),

    /// Network failures, undecodable bodies, anything else
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Maps a non-success HTTP status to its error kind.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => FetchError::NotFound,
            StatusCode::FORBIDDEN => FetchError::RateLimited,
            other => FetchError::ApiError {
                status: other.as_u16(),
            },
        }
    }

    /// The raw HTTP status behind this error, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NotFound => Some(404),
            FetchError::RateLimited => Some(403),
            FetchError::ApiError { status } => Some(*status),
            FetchError::MalformedResponse(_) | FetchError::Unexpected(_) => None,
        }
    }
}

// Transport-level reqwest failures (timeouts, DNS, TLS, bad bodies) all land
// in Unexpected; statuses are classified by from_status before we get here.
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => FetchError::from_status(status),
            None => FetchError::Unexpected(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            FetchError::from_status(StatusCode::NOT_FOUND),
            FetchError::NotFound
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::FORBIDDEN),
            FetchError::RateLimited
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            FetchError::ApiError { status: 500 }
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::UNAUTHORIZED),
            FetchError::ApiError { status: 401 }
        ));
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(FetchError::NotFound.status(), Some(404));
        assert_eq!(FetchError::RateLimited.status(), Some(403));
        assert_eq!(FetchError::ApiError { status: 502 }.status(), Some(502));
        assert_eq!(FetchError::Unexpected("boom".into()).status(), None);
    }
}
