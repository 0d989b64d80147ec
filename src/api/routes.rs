use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::gateway::{ApiRequest, Gateway};
use crate::types::{RouteRecommendation, RouteSearchRequest};

use super::fetch_data;

#[derive(Debug, Clone)]
pub struct RoutesApi {
    gateway: Arc<Gateway>,
}

impl RoutesApi {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Fastest and leisurely routes from the user to the pin.
    pub async fn search(&self, request: &RouteSearchRequest) -> Result<RouteRecommendation> {
        if !request.user_location.is_valid() || !request.pin_location.is_valid() {
            return Err(ApiError::InvalidArgument(
                "route endpoints must be valid coordinates".to_string(),
            ));
        }
        let request = ApiRequest::post("/api/routes/search").json(request)?;
        fetch_data(&self.gateway, request).await
    }
}
