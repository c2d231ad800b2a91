//! Transport error taxonomy for leaderboard service calls.
//!
//! ERROR HANDLING
//! ==============
//! The core only distinguishes "no response at all" from "the service
//! answered with a failure". Status codes and detail text are carried for
//! display and logging, never for control flow.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Longest raw response body kept as detail text.
const MAX_DETAIL_LEN: usize = 200;

/// Errors produced by [`LeaderboardApi`](super::api::LeaderboardApi) calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was observed (connection refused, DNS, timeout, CORS).
    #[error("service unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-success status.
    #[error("service rejected request: status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// A success response carried a body that could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Whether the failure means the service could not be reached at all.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// Human-readable detail supplied by the service, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return Self::Decode(error.to_string());
        }
        if error.is_builder() {
            return Self::HttpClientBuild(error.to_string());
        }
        match error.status() {
            Some(status) => Self::Rejected { status: status.as_u16(), detail: None },
            None => Self::Unreachable(error.to_string()),
        }
    }
}

/// Pull a human-readable detail out of an error response body.
///
/// JSON bodies are searched for `message`, `error`, then `detail`; anything
/// else is used verbatim (trimmed, truncated) when non-empty.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if value.is_object() {
            return ["message", "error", "detail"]
                .iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned);
        }
    }
    Some(trimmed.chars().take(MAX_DETAIL_LEN).collect())
}
