use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Weather hint for music recommendations.
///
/// Provisional: the backend's weather catalogue is not published, so these
/// variants and their SCREAMING_SNAKE wire names may need to change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

/// Time-of-day hint for music recommendations.
///
/// Provisional like [`Weather`]; the hour buckets in [`TimeOfDay::from_hour`]
/// are client-side defaults, not backend rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket a local hour (0-23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MusicRequest {
    pub road_id: i64,
    pub weather: Weather,
    pub time_of_day: TimeOfDay,
}

/// Playlist suggested for a walk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Playlist {
    pub theme_title: String,
    #[serde(default)]
    pub recommend_reason: String,
    pub playlist_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
}
