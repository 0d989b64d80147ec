//! Convenience re-exports for common use.

pub use crate::auth::{AuthService, CredentialStore, LoginRequest, SignupRequest};
pub use crate::client::ShadewalkClient;
pub use crate::config::ClientConfig;
pub use crate::error::{ApiError, Result};
pub use crate::gateway::{ApiRequest, ApiResponse, Gateway};
pub use crate::stores::{FavoritesStore, LocationStore};
pub use crate::types::{BoundingBox, LatLng, RouteKind, RouteRecommendation, RouteSearchRequest};
