//! Client-side state caches over the REST endpoints.

pub mod favorites;
pub mod location;

pub use favorites::FavoritesStore;
pub use location::{LocationStore, DEFAULT_LOCATION};
