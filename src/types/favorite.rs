use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateFavoriteRequest {
    pub segment_id: i64,
    pub road_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteId {
    pub favorite_id: i64,
}

/// A segment the user saved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteRoad {
    pub favorite_id: i64,
    pub segment_id: i64,
    pub road_name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
