//! Wire types exchanged with the backend (snake_case on the wire).

pub mod emoji;
pub mod envelope;
pub mod favorite;
pub mod geo;
pub mod music;
pub mod road;
pub mod route;

pub use emoji::{EmojiTagRequest, EmojiTagStats, TagCode, TagInfo};
pub use envelope::{ApiEnvelope, BasicResponse};
pub use favorite::{CreateFavoriteRequest, FavoriteId, FavoriteRoad};
pub use geo::{BoundingBox, LatLng};
pub use music::{MusicRequest, Playlist, TimeOfDay, Weather};
pub use road::{Emotion, RoadDetail, RoadSegment};
pub use route::{
    AvenuePath, AvenueSummary, FastestPath, FastestSummary, RouteKind, RouteRecommendation,
    RouteSearchRequest, SelectedRoute,
};
