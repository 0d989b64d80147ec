use std::sync::Arc;

use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};
use crate::types::{BasicResponse, CreateFavoriteRequest, FavoriteId, FavoriteRoad};

use super::fetch_data;

#[derive(Debug, Clone)]
pub struct FavoritesApi {
    gateway: Arc<Gateway>,
}

impl FavoritesApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Save a segment; returns the id assigned by the backend.
    pub async fn add(&self, segment_id: i64, road_name: &str) -> Result<i64> {
        let body = CreateFavoriteRequest {
            segment_id,
            road_name: road_name.to_string(),
        };
        let request = ApiRequest::post("/api/favorites").json(&body)?;
        let created: FavoriteId = fetch_data(&self.gateway, request).await?;
        Ok(created.favorite_id)
    }

    pub async fn list(&self) -> Result<Vec<FavoriteRoad>> {
        fetch_data(&self.gateway, ApiRequest::get("/api/favorites")).await
    }

    pub async fn remove(&self, favorite_id: i64) -> Result<BasicResponse> {
        self.gateway
            .send(ApiRequest::delete(format!("/api/favorites/{favorite_id}")))
            .await?
            .json_or_default()
    }
}
