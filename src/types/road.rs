use serde::{Deserialize, Serialize};

use super::geo::LatLng;

/// A recommended street segment returned by the nearby query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadSegment {
    pub segment_id: i64,
    pub road_name: String,
    #[serde(default)]
    pub has_trees: bool,
    /// Lower ranks are shadier.
    pub shade_rank: u32,
    #[serde(default)]
    pub coordinates: Vec<LatLng>,
}

/// Emoji tag shown on a segment card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Emotion {
    pub emoji: String,
    pub label: String,
}

/// Detail view of a single segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadDetail {
    pub segment_id: i64,
    pub road_name: String,
    #[serde(default)]
    pub emotions: Vec<Emotion>,
    #[serde(default)]
    pub total_like_count: u64,
    #[serde(default)]
    pub is_liked: bool,
}
