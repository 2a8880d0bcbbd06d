//! Fetch Errors
//!
//! Failure kinds of a recommendation request. All of them surface to the
//! user as the same message; the kind only shows up in logs.

use thiserror::Error;

/// The one message the view shows for any failed request
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recommendations.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Short tag for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request(_) => "request",
            FetchError::Network(_) => "network",
            FetchError::Status(_) => "status",
            FetchError::Malformed(_) => "malformed",
        }
    }

    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_share_user_message() {
        let errors = [
            FetchError::Request("bad".into()),
            FetchError::Network("offline".into()),
            FetchError::Status(500),
            FetchError::Malformed("eof".into()),
        ];
        for e in &errors {
            assert_eq!(e.user_message(), FETCH_FAILED_MESSAGE);
        }
        assert_eq!(errors[2].to_string(), "server responded with HTTP 500");
    }

    #[test]
    fn test_json_error_is_malformed() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.kind(), "malformed");
    }
}
