use bon::Builder;
use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether the point lies on the globe.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Visible map area used for nearby-segment queries.
///
/// # Example
/// ```
/// use shadewalk::types::BoundingBox;
///
/// let bounds = BoundingBox::builder()
///     .min_lat(37.53)
///     .min_lng(127.06)
///     .max_lat(37.55)
///     .max_lng(127.09)
///     .zoom_level(4)
///     .build();
/// assert!(bounds.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Builder, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
    pub zoom_level: u8,
}

impl BoundingBox {
    /// Reject boxes whose corners are swapped or off the globe.
    pub fn validate(&self) -> Result<(), String> {
        let south_west = LatLng::new(self.min_lat, self.min_lng);
        let north_east = LatLng::new(self.max_lat, self.max_lng);
        if !south_west.is_valid() || !north_east.is_valid() {
            return Err("bounding box corner is off the globe".to_string());
        }
        if self.min_lat > self.max_lat || self.min_lng > self.max_lng {
            return Err("bounding box minimum exceeds maximum".to_string());
        }
        Ok(())
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}
