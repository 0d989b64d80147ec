use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::gateway::{ApiRequest, Gateway};
use crate::types::{BoundingBox, RoadDetail, RoadSegment};

use super::fetch_data;

#[derive(Debug, Clone)]
pub struct RoadsApi {
    gateway: Arc<Gateway>,
}

impl RoadsApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Detail card for one segment.
    pub async fn detail(&self, segment_id: i64) -> Result<RoadDetail> {
        fetch_data(&self.gateway, ApiRequest::get(format!("/api/roads/{segment_id}"))).await
    }

    /// Recommended segments inside the visible map area.
    pub async fn nearby(&self, bounds: &BoundingBox) -> Result<Vec<RoadSegment>> {
        bounds.validate().map_err(ApiError::InvalidArgument)?;
        let request = ApiRequest::get("/api/roads/nearby").query(bounds)?;
        fetch_data(&self.gateway, request).await
    }
}
