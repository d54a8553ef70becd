//! The incident map context
//!
//! [`IncidentMap`] owns the store, the resolver chain, the marker list, and
//! the bounds accumulator; all state changes go through its methods.

pub mod marker;

pub use marker::IncidentMarker;

use crate::core::config::MapConfig;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::incident::{Incident, Severity};
use crate::geocode::GeocodePipeline;
use crate::report::IncidentReport;
use crate::store::IncidentStore;
use crate::triage;
use crate::MapError;

/// What the widget should show: fitted incident bounds when any markers
/// exist, the configured world view otherwise
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Fit { bounds: LatLngBounds, padding: u32 },
    Default { center: LatLng, zoom: f64 },
}

/// Outcome of a successful report submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub score: u8,
    pub incident: Incident,
}

/// Owned context for the emergency map
pub struct IncidentMap {
    config: MapConfig,
    store: IncidentStore,
    geocoder: GeocodePipeline,
    markers: Vec<IncidentMarker>,
    bounds: LatLngBounds,
}

impl IncidentMap {
    /// Creates a map with file-backed storage per the configuration
    pub fn new(config: MapConfig) -> Self {
        let store = IncidentStore::with_file_storage(&config.storage);
        Self::with_store(config, store)
    }

    /// Creates a map over an explicit store (in-memory for tests/demos)
    pub fn with_store(config: MapConfig, store: IncidentStore) -> Self {
        let geocoder = GeocodePipeline::new(&config.geocoder);
        Self {
            config,
            store,
            geocoder,
            markers: Vec::new(),
            bounds: LatLngBounds::empty(),
        }
    }

    /// Populates markers from the seed list plus persisted user incidents
    pub fn load(&mut self) {
        for incident in self.store.all_incidents() {
            self.push_marker(incident);
        }
        log::info!("map loaded with {} incidents", self.markers.len());
    }

    /// Adds one incident to the rendered set, extending the bounds
    pub fn add_incident(&mut self, incident: Incident) {
        self.push_marker(incident);
    }

    fn push_marker(&mut self, incident: Incident) {
        self.bounds.extend(&incident.coords);
        self.markers.push(IncidentMarker::new(incident));
    }

    /// Processes a report submission end to end: validate, score, resolve
    /// the location (never fails, worst case a pseudo-coordinate), then add
    /// the incident to the map and to storage.
    ///
    /// Validation is the only error; every downstream failure is absorbed
    /// into a fallback.
    pub async fn submit(&mut self, report: &IncidentReport) -> Result<Submission, MapError> {
        report.validate()?;

        let level = Severity::from_urgency(&report.urgency);
        let score = triage::priority_score(level, &report.disaster_type);
        let resolved = self.geocoder.resolve(&report.location).await;

        let place = resolved
            .label
            .clone()
            .unwrap_or_else(|| report.location.clone());
        let title = format!("{} | {}", report.disaster_type, place);
        let summary: String = report.message.chars().take(80).collect();
        let status = format!("Priority {} • {}", score, summary);

        let incident = Incident::new(title, resolved.coords, level, status);
        self.store.append(&incident);
        self.push_marker(incident.clone());

        log::info!(
            "report from {} mapped at {} with priority {}",
            report.reporter(),
            incident.coords,
            score
        );

        Ok(Submission { score, incident })
    }

    /// The view the widget should apply
    pub fn view(&self) -> MapView {
        if self.bounds.is_valid() {
            MapView::Fit {
                bounds: self.bounds.clone(),
                padding: self.config.view.fit_padding,
            }
        } else {
            MapView::Default {
                center: self.config.view.default_center,
                zoom: self.config.view.default_zoom,
            }
        }
    }

    /// Number of rendered incidents
    pub fn live_count(&self) -> usize {
        self.markers.len()
    }

    pub fn markers(&self) -> &[IncidentMarker] {
        &self.markers
    }

    pub fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    pub fn store(&self) -> &IncidentStore {
        &self.store
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::incident::seed_incidents;
    use crate::store::{IncidentStore, MemoryStorage, STORAGE_KEY};

    fn test_map() -> IncidentMap {
        IncidentMap::with_store(
            MapConfig::for_testing(),
            IncidentStore::new(Box::new(MemoryStorage::new()), STORAGE_KEY),
        )
    }

    #[test]
    fn test_fresh_map_uses_default_view() {
        let map = test_map();
        assert_eq!(map.live_count(), 0);
        assert_eq!(
            map.view(),
            MapView::Default {
                center: LatLng::new(20.0, 0.0),
                zoom: 2.0
            }
        );
    }

    #[test]
    fn test_load_renders_seed_incidents() {
        let mut map = test_map();
        map.load();

        assert_eq!(map.live_count(), seed_incidents().len());
        match map.view() {
            MapView::Fit { bounds, padding } => {
                assert!(bounds.is_valid());
                assert_eq!(padding, 32);
                for seed in seed_incidents() {
                    assert!(bounds.contains(&seed.coords));
                }
            }
            MapView::Default { .. } => panic!("expected fitted bounds"),
        }
    }

    #[test]
    fn test_bounds_are_minimal_over_markers() {
        let mut map = test_map();
        map.add_incident(Incident::new(
            "A".to_string(),
            LatLng::new(10.0, -20.0),
            Severity::Low,
            "s".to_string(),
        ));
        map.add_incident(Incident::new(
            "B".to_string(),
            LatLng::new(-5.0, 40.0),
            Severity::Low,
            "s".to_string(),
        ));

        let bounds = map.bounds();
        assert_eq!(bounds.south_west, LatLng::new(-5.0, -20.0));
        assert_eq!(bounds.north_east, LatLng::new(10.0, 40.0));
    }

    #[tokio::test]
    async fn test_submit_rejects_incomplete_reports() {
        let mut map = test_map();
        let report = IncidentReport {
            location: "Manila".to_string(),
            ..Default::default()
        };

        let err = map.submit(&report).await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields");
        assert_eq!(map.live_count(), 0);
        assert!(map.store().load_user_incidents().is_empty());
    }
}
