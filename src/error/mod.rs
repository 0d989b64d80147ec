//! Error types for the shadewalk client.

use reqwest::StatusCode;
use thiserror::Error;

/// Primary error type for all client operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The backend rejected our credentials and they could not be refreshed.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Broad error category for routing recovery logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Upstream,
    Network,
    Storage,
    Configuration,
    Serialization,
    Invalid,
}

impl ApiError {
    /// Create an upstream error for a non-success status.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Build an upstream error from a raw backend response.
    ///
    /// The backend wraps failures in `{ "status": .., "message": .. }`; the
    /// message is lifted out when present, otherwise the raw body is kept.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        Self::upstream(status.as_u16(), response_message(status, body))
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unauthenticated(_) => ErrorCategory::Authentication,
            Self::Upstream { .. } => ErrorCategory::Upstream,
            Self::Network(_) => ErrorCategory::Network,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::Storage(_) => ErrorCategory::Storage,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) => ErrorCategory::Invalid,
        }
    }

    /// Whether the user has to sign in again before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }

    /// Any backend or transport failure other than credential expiry.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Upstream | ErrorCategory::Network
        )
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub(crate) fn response_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });
    if let Some(message) = from_json {
        return message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ApiError>;
