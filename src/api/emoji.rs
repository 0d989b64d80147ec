use std::sync::Arc;

use serde::Deserialize;

use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};
use crate::types::{EmojiTagRequest, EmojiTagStats};

use super::fetch;

#[derive(Debug, Clone)]
pub struct EmojiApi {
    gateway: Arc<Gateway>,
}

#[derive(Debug, Deserialize)]
struct TagVoteResponse {
    #[serde(default)]
    data: Option<EmojiTagStats>,
}

impl EmojiApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Record post-walk feedback for a segment.
    ///
    /// Returns the segment's updated tag statistics when the backend sends
    /// them back; a bare acknowledgement yields `None`.
    pub async fn add_tag(
        &self,
        road_id: i64,
        tag: &EmojiTagRequest,
    ) -> Result<Option<EmojiTagStats>> {
        let request = ApiRequest::post(format!("/api/emoji/{road_id}/tags")).json(tag)?;
        let response: TagVoteResponse = fetch(&self.gateway, request).await?;
        Ok(response.data)
    }
}
