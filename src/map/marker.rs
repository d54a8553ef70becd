use crate::core::geo::LatLng;
use crate::core::incident::Incident;

/// Marker icon metrics, matching the widget's dot styling
pub const MARKER_ICON_SIZE: u32 = 18;
pub const MARKER_ICON_ANCHOR: u32 = 9;

/// A rendered incident: position, popup content, and severity styling
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentMarker {
    incident: Incident,
}

impl IncidentMarker {
    pub fn new(incident: Incident) -> Self {
        Self { incident }
    }

    pub fn incident(&self) -> &Incident {
        &self.incident
    }

    pub fn position(&self) -> LatLng {
        self.incident.coords
    }

    /// CSS class for the marker dot, colored by severity
    pub fn css_class(&self) -> String {
        format!("marker-dot marker-{}", self.incident.level)
    }

    /// Popup markup shown when the marker is selected
    pub fn popup_html(&self) -> String {
        format!(
            "<strong>{}</strong><br>Urgency: {}<br>Status: {}",
            self.incident.title,
            self.incident.level.as_str().to_uppercase(),
            self.incident.status
        )
    }
}
