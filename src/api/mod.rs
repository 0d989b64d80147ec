//! Typed wrappers over the backend's REST endpoints.
//!
//! Each wrapper is a cheap handle on a shared [`Gateway`], so every call
//! participates in the same refresh coordination.

pub mod emoji;
pub mod favorites;
pub mod music;
pub mod roads;
pub mod routes;

pub use emoji::EmojiApi;
pub use favorites::FavoritesApi;
pub use music::MusicApi;
pub use roads::RoadsApi;
pub use routes::RoutesApi;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::gateway::{ApiRequest, Gateway};
use crate::types::ApiEnvelope;

/// Send `request` and unwrap the `data` field of the envelope.
pub(crate) async fn fetch_data<T: DeserializeOwned>(
    gateway: &Gateway,
    request: ApiRequest,
) -> Result<T> {
    let response = gateway.send(request).await?;
    Ok(response.json::<ApiEnvelope<T>>()?.into_data())
}

/// Send `request` and decode the whole body.
pub(crate) async fn fetch<T: DeserializeOwned>(
    gateway: &Gateway,
    request: ApiRequest,
) -> Result<T> {
    gateway.send(request).await?.json()
}
