use std::sync::Arc;

use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};
use crate::types::{MusicRequest, Playlist};

use super::fetch_data;

#[derive(Debug, Clone)]
pub struct MusicApi {
    gateway: Arc<Gateway>,
}

impl MusicApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn recommend(&self, request: &MusicRequest) -> Result<Playlist> {
        let request = ApiRequest::post("/api/music/recommend").json(request)?;
        fetch_data(&self.gateway, request).await
    }
}
