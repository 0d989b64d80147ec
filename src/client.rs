//! Entry point bundling the gateway with every endpoint wrapper.

use std::sync::Arc;

use crate::api::{EmojiApi, FavoritesApi, MusicApi, RoadsApi, RoutesApi};
use crate::auth::{AuthService, CredentialStore};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::stores::FavoritesStore;

/// One authenticated session against the backend.
///
/// All handles returned here share a single [`Gateway`], and with it a
/// single refresh episode at a time.
///
/// # Example
/// ```no_run
/// use shadewalk::{ClientConfig, ShadewalkClient};
/// use shadewalk::types::BoundingBox;
///
/// # async fn example() -> shadewalk::error::Result<()> {
/// let client = ShadewalkClient::from_config(&ClientConfig::from_env()?)?;
/// let bounds = BoundingBox::builder()
///     .min_lat(37.53).min_lng(127.06).max_lat(37.55).max_lng(127.09)
///     .zoom_level(4)
///     .build();
/// for road in client.roads().nearby(&bounds).await? {
///     println!("{} (shade rank {})", road.road_name, road.shade_rank);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShadewalkClient {
    gateway: Arc<Gateway>,
}

impl ShadewalkClient {
    /// Client with the file-backed credential store from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(config.credential_store()))
    }

    pub fn with_store(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        Ok(Self::from_gateway(Arc::new(Gateway::new(config, store)?)))
    }

    pub fn from_gateway(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(Arc::clone(&self.gateway))
    }

    pub fn roads(&self) -> RoadsApi {
        RoadsApi::new(Arc::clone(&self.gateway))
    }

    pub fn routes(&self) -> RoutesApi {
        RoutesApi::new(Arc::clone(&self.gateway))
    }

    pub fn favorites(&self) -> FavoritesApi {
        FavoritesApi::new(Arc::clone(&self.gateway))
    }

    pub fn emoji(&self) -> EmojiApi {
        EmojiApi::new(Arc::clone(&self.gateway))
    }

    pub fn music(&self) -> MusicApi {
        MusicApi::new(Arc::clone(&self.gateway))
    }

    /// A fresh favorites cache bound to this session.
    pub fn favorites_store(&self) -> FavoritesStore {
        FavoritesStore::new(self.favorites())
    }
}
