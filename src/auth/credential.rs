use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Long-lived refresh credential exchanged for a new access cookie.
///
/// # Example
/// ```
/// use shadewalk::auth::RefreshCredential;
///
/// let credential = RefreshCredential::new("refresh-abc");
/// assert_eq!(credential.as_str(), "refresh-abc");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshCredential {
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

impl RefreshCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            saved_at: Utc::now(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for RefreshCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshCredential")
            .field("token", &"<redacted>")
            .field("saved_at", &self.saved_at)
            .finish()
    }
}
