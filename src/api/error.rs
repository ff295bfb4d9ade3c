//! API error type and its mapping to user-facing messages

use crate::constants::{CONNECTION_ERROR_PREFIX, LOAD_ERROR_PREFIX, UNKNOWN_ERROR};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server answered with a non-success status
    #[error("HTTP {status}")]
    Status { status: u16, body: Option<String> },

    /// No response was received (DNS, connect, TLS, timeout)
    #[error("{0}")]
    Transport(String),

    /// Success status but the body is not a quote response
    #[error("{0}")]
    Decode(String),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// Log category used when the error is reported
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "API error",
            ApiError::Transport(_) | ApiError::Decode(_) => "request failure",
            ApiError::InvalidBaseUrl { .. } | ApiError::Client(_) => "configuration",
        }
    }

    /// Message shown in the error view
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => {
                let body = body
                    .as_deref()
                    .filter(|b| !b.trim().is_empty())
                    .unwrap_or(UNKNOWN_ERROR);
                format!("{}: {}", LOAD_ERROR_PREFIX, body)
            }
            other => format!("{}: {}", CONNECTION_ERROR_PREFIX, other),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let description = describe(&err);
        if err.is_decode() {
            ApiError::Decode(description)
        } else {
            ApiError::Transport(description)
        }
    }
}

/// reqwest's top-level message hides the cause ("error sending request"),
/// so walk the source chain.
fn describe(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
