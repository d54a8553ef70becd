//! Configuration for geocoding endpoints, storage location, and map view
//!
//! Defaults mirror the platform's deployed setup: a local geocoder service
//! with a short timeout, public Nominatim as fallback, and a JSON file store
//! under a local data directory.

use crate::core::geo::LatLng;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the tiered location resolver
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    /// Endpoint of the primary geocoder service (POST `{query}`)
    pub service_endpoint: String,
    /// Request timeout for the primary tier
    pub service_timeout: Duration,
    /// Search endpoint of the public fallback geocoder
    pub nominatim_endpoint: String,
    /// Minimum spacing between consecutive public queries
    pub nominatim_min_interval: Duration,
    /// Capacity of the resolved-location cache
    pub cache_size: usize,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            service_endpoint: "http://localhost:8000/geocode".to_string(),
            service_timeout: Duration::from_millis(2500),
            nominatim_endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            nominatim_min_interval: Duration::from_secs(1),
            cache_size: 128,
        }
    }
}

impl GeocoderConfig {
    /// Preset with unroutable endpoints and a tiny timeout, so both remote
    /// tiers fail fast and resolution lands on the pseudo-geocoder.
    pub fn for_testing() -> Self {
        Self {
            service_endpoint: "http://127.0.0.1:9/geocode".to_string(),
            service_timeout: Duration::from_millis(250),
            nominatim_endpoint: "http://127.0.0.1:9/search".to_string(),
            nominatim_min_interval: Duration::ZERO,
            cache_size: 8,
        }
    }
}

/// Settings for the persisted incident collection
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    pub dir: PathBuf,
    /// Key the incident list is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".sentinel-map"),
            key: crate::store::STORAGE_KEY.to_string(),
        }
    }
}

/// Settings for the initial map view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Center used when no incident bounds are available
    pub default_center: LatLng,
    /// Zoom used when no incident bounds are available
    pub default_zoom: f64,
    /// Pixel padding applied when fitting bounds
    pub fit_padding: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_center: LatLng::new(20.0, 0.0),
            default_zoom: 2.0,
            fit_padding: 32,
        }
    }
}

/// Top-level configuration for an [`IncidentMap`](crate::map::IncidentMap)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapConfig {
    pub geocoder: GeocoderConfig,
    pub storage: StorageConfig,
    pub view: ViewConfig,
}

impl MapConfig {
    /// Preset for tests: remote geocoding tiers fail fast
    pub fn for_testing() -> Self {
        Self {
            geocoder: GeocoderConfig::for_testing(),
            storage: StorageConfig::default(),
            view: ViewConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geocoder_config() {
        let config = GeocoderConfig::default();
        assert_eq!(config.service_endpoint, "http://localhost:8000/geocode");
        assert_eq!(config.service_timeout, Duration::from_millis(2500));
        assert_eq!(config.nominatim_min_interval, Duration::from_secs(1));
    }

    #[test]
    fn test_default_view_config() {
        let view = ViewConfig::default();
        assert_eq!(view.default_center, LatLng::new(20.0, 0.0));
        assert_eq!(view.default_zoom, 2.0);
        assert_eq!(view.fit_padding, 32);
    }
}
