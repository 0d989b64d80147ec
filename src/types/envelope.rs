use serde::{Deserialize, Serialize};

/// Standard `{ status, message, data }` wrapper around backend payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Acknowledgement for calls whose payload is irrelevant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BasicResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}
