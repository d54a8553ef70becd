//! # Sentinel-Map
//!
//! The incident-mapping core of a disaster-alert platform.
//!
//! This library owns the combined list of seed and user-reported incidents,
//! resolves free-text locations through a tiered geocoding fallback chain
//! (local service, public Nominatim, deterministic pseudo-geocode), persists
//! user reports to durable local storage, and exposes marker and bounds state
//! for any map widget to render.

pub mod core;
pub mod geocode;
pub mod map;
pub mod report;
pub mod store;
pub mod triage;

pub mod prelude;

// Re-export public API
pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, LatLngBounds},
    incident::{Incident, Severity},
};

pub use crate::geocode::{GeocodePipeline, ResolvedLocation, Resolver};

pub use crate::map::{IncidentMap, IncidentMarker, MapView};

pub use crate::report::IncidentReport;

pub use crate::store::{FileStorage, IncidentStore, MemoryStorage, StorageBackend};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),
}

/// Error type alias for convenience
pub type Error = MapError;
