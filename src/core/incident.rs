use crate::core::geo::LatLng;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Urgency level of an incident, drives marker color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Maps a free-text urgency value to a level, defaulting to medium
    pub fn from_urgency(urgency: &str) -> Self {
        match urgency {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single reported or seed emergency event.
///
/// Field order is fixed so that serialized comparison of records is
/// deterministic; the persisted form is
/// `{"title", "coords": [lat, lng], "level", "status", "isBase"?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub title: String,
    #[serde(with = "coords_array")]
    pub coords: LatLng,
    pub level: Severity,
    pub status: String,
    #[serde(rename = "isBase", default, skip_serializing_if = "Option::is_none")]
    pub is_base: Option<bool>,
}

impl Incident {
    pub fn new(title: String, coords: LatLng, level: Severity, status: String) -> Self {
        Self {
            title,
            coords,
            level,
            status,
            is_base: None,
        }
    }

    /// Whether this record is part of the fixed seed list
    pub fn is_seed(&self) -> bool {
        self.is_base == Some(true)
    }
}

/// Incident coordinates are persisted as a `[lat, lng]` pair rather than the
/// struct form used elsewhere.
mod coords_array {
    use super::LatLng;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(coords: &LatLng, serializer: S) -> Result<S::Ok, S::Error> {
        (coords.lat, coords.lng).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LatLng, D::Error> {
        let (lat, lng) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(LatLng::new(lat, lng))
    }
}

/// Seed data present on every fresh load, used to pre-populate the map
static SEED_INCIDENTS: Lazy<Vec<Incident>> = Lazy::new(|| {
    let records = [
        (
            "Wildfire | Los Angeles, United States",
            LatLng::new(34.0522, -118.2437),
            Severity::Critical,
            "Active response",
        ),
        (
            "Flooding | Manila, Philippines",
            LatLng::new(14.5995, 120.9842),
            Severity::High,
            "Evacuation underway",
        ),
        (
            "Landslide Risk | Medellin, Colombia",
            LatLng::new(6.2476, -75.5658),
            Severity::Medium,
            "Monitoring",
        ),
        (
            "Road Blockage | Warsaw, Poland",
            LatLng::new(52.2297, 21.0122),
            Severity::Low,
            "Clearing crew en route",
        ),
        (
            "Earthquake Aftershock | Tokyo, Japan",
            LatLng::new(35.6762, 139.6503),
            Severity::Critical,
            "Search and rescue",
        ),
    ];

    records
        .into_iter()
        .map(|(title, coords, level, status)| Incident {
            title: title.to_string(),
            coords,
            level,
            status: status.to_string(),
            is_base: Some(true),
        })
        .collect()
});

/// The fixed seed incident list, in load order
pub fn seed_incidents() -> &'static [Incident] {
    &SEED_INCIDENTS
}
