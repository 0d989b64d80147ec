use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::{debug, warn};

use crate::api::FavoritesApi;
use crate::error::Result;
use crate::types::FavoriteRoad;

#[derive(Debug, Default)]
struct FavoritesState {
    favorites: Vec<FavoriteRoad>,
    is_loading: bool,
    error: Option<String>,
}

/// Cached view of the user's favorite segments.
///
/// Removal is optimistic: the entry disappears immediately and is restored
/// if the backend call fails.
#[derive(Debug)]
pub struct FavoritesStore {
    api: FavoritesApi,
    state: RwLock<FavoritesState>,
}

impl FavoritesStore {
    pub fn new(api: FavoritesApi) -> Self {
        Self {
            api,
            state: RwLock::new(FavoritesState::default()),
        }
    }

    /// Replace the cache with the backend's list.
    ///
    /// Failures are recorded in [`FavoritesStore::last_error`] rather than
    /// returned, leaving the previous list in place.
    pub async fn load(&self) {
        let _ = self.try_load().await;
    }

    /// Like [`FavoritesStore::load`], but also hands the failure back.
    pub async fn try_load(&self) -> Result<()> {
        {
            let mut state = self.write();
            state.is_loading = true;
            state.error = None;
        }
        let result = self.api.list().await;
        let mut state = self.write();
        state.is_loading = false;
        match result {
            Ok(mut favorites) => {
                let now = Utc::now();
                for favorite in &mut favorites {
                    favorite.created_at.get_or_insert(now);
                }
                debug!(count = favorites.len(), "favorites loaded");
                state.favorites = favorites;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load favorites");
                state.error = Some(format!("failed to load favorites: {err}"));
                Err(err)
            }
        }
    }

    /// Save a segment. Does nothing if it is already a favorite.
    pub async fn add(&self, segment_id: i64, road_name: &str) -> Result<()> {
        if self.is_favorite(segment_id) {
            return Ok(());
        }
        self.write().error = None;

        match self.api.add(segment_id, road_name).await {
            Ok(favorite_id) => {
                let mut state = self.write();
                // A concurrent add for the same segment may have landed first.
                if !state.favorites.iter().any(|f| f.segment_id == segment_id) {
                    state.favorites.push(FavoriteRoad {
                        favorite_id,
                        segment_id,
                        road_name: road_name.to_string(),
                        created_at: Some(Utc::now()),
                    });
                }
                Ok(())
            }
            Err(err) => {
                self.write().error = Some(format!("failed to add favorite: {err}"));
                Err(err)
            }
        }
    }

    pub async fn remove(&self, favorite_id: i64) -> Result<()> {
        let removed = {
            let mut state = self.write();
            state.error = None;
            let position = state
                .favorites
                .iter()
                .position(|f| f.favorite_id == favorite_id);
            position.map(|idx| (idx, state.favorites.remove(idx)))
        };

        match self.api.remove(favorite_id).await {
            Ok(_) => Ok(()),
            Err(err) => {
                let mut state = self.write();
                if let Some((idx, favorite)) = removed {
                    let idx = idx.min(state.favorites.len());
                    state.favorites.insert(idx, favorite);
                }
                state.error = Some(format!("failed to remove favorite: {err}"));
                Err(err)
            }
        }
    }

    /// Remove by segment. Does nothing if the segment is not a favorite.
    pub async fn remove_by_segment_id(&self, segment_id: i64) -> Result<()> {
        match self.favorite_id(segment_id) {
            Some(favorite_id) => self.remove(favorite_id).await,
            None => Ok(()),
        }
    }

    pub fn is_favorite(&self, segment_id: i64) -> bool {
        self.read().favorites.iter().any(|f| f.segment_id == segment_id)
    }

    pub fn favorite_id(&self, segment_id: i64) -> Option<i64> {
        self.read()
            .favorites
            .iter()
            .find(|f| f.segment_id == segment_id)
            .map(|f| f.favorite_id)
    }

    pub fn favorites(&self) -> Vec<FavoriteRoad> {
        self.read().favorites.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, FavoritesState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FavoritesState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
