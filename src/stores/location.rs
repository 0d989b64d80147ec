use std::sync::{PoisonError, RwLock};

use crate::types::LatLng;

/// Map centre used until the device reports a position (Konkuk University).
pub const DEFAULT_LOCATION: LatLng = LatLng::new(37.5408, 127.0793);

/// Last known position of the user.
#[derive(Debug)]
pub struct LocationStore {
    location: RwLock<LatLng>,
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}

impl LocationStore {
    pub fn new(initial: LatLng) -> Self {
        Self {
            location: RwLock::new(initial),
        }
    }

    pub fn get(&self) -> LatLng {
        *self.location.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Update the position. Points off the globe are ignored.
    pub fn set(&self, location: LatLng) -> bool {
        if !location.is_valid() {
            return false;
        }
        *self.location.write().unwrap_or_else(PoisonError::into_inner) = location;
        true
    }
}
