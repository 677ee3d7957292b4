//! User-facing fetch failure taxonomy.
//!
//! Every variant renders as the text shown after `"Error: "` on a page, so
//! the `Display` strings are part of the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::SchemaError;

/// Fallback text for failures that carry no user-meaningful detail.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Outcome of a failed chapter fetch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never produced a response (connection refused, CORS, ...).
    /// The detail is kept for logging only.
    #[error("An unknown error occurred")]
    Network(String),

    /// The body was not the expected JSON shape.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The body decoded but broke the chapter invariants.
    #[error("invalid chapter data: {0}")]
    Schema(#[from] SchemaError),

    /// Fetching is a browser effect; SSR renders the loading state instead.
    #[error("not available on server")]
    Unavailable,
}

impl FetchError {
    /// Diagnostic detail suitable for logs, which may differ from the UI text.
    #[must_use]
    pub fn log_detail(&self) -> String {
        match self {
            Self::Network(detail) => format!("network failure: {detail}"),
            other => other.to_string(),
        }
    }
}
