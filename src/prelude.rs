//! Prelude module for common sentinel-map types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use sentinel_map::prelude::*;`

pub use crate::core::{
    config::{GeocoderConfig, MapConfig, StorageConfig, ViewConfig},
    geo::{LatLng, LatLngBounds},
    incident::{seed_incidents, Incident, Severity},
};

pub use crate::geocode::{
    pseudo_geocode, GeocodePipeline, NominatimResolver, PseudoResolver, ResolvedLocation, Resolver,
    ServiceResolver,
};

pub use crate::map::{
    marker::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE},
    IncidentMap, IncidentMarker, MapView, Submission,
};

pub use crate::report::IncidentReport;

pub use crate::store::{
    FileStorage, IncidentStore, MemoryStorage, StorageBackend, STORAGE_KEY,
};

pub use crate::triage::{priority_score, priority_score_with};

pub use crate::{Error as MapError, Result};

pub use std::{sync::Arc, time::Duration};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
