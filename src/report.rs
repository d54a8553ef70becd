//! Raw emergency report submissions, as entered in the request form

use crate::MapError;

/// A user-entered emergency report, prior to geocoding and scoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentReport {
    pub name: String,
    pub location: String,
    pub disaster_type: String,
    pub urgency: String,
    pub message: String,
}

impl IncidentReport {
    /// Reporter name for display, defaulting to anonymous
    pub fn reporter(&self) -> &str {
        if self.name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.name
        }
    }

    /// Checks the required fields. The resulting message is the only error
    /// ever shown to the end user.
    pub fn validate(&self) -> Result<(), MapError> {
        let required = [
            &self.location,
            &self.disaster_type,
            &self.urgency,
            &self.message,
        ];

        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(MapError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_report() -> IncidentReport {
        IncidentReport {
            name: "Jordan".to_string(),
            location: "Manila, Philippines".to_string(),
            disaster_type: "flood".to_string(),
            urgency: "high".to_string(),
            message: "Water rising on the east side".to_string(),
        }
    }

    #[test]
    fn test_complete_report_validates() {
        assert!(complete_report().validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        for strip in 0..4 {
            let mut report = complete_report();
            match strip {
                0 => report.location.clear(),
                1 => report.disaster_type.clear(),
                2 => report.urgency = "   ".to_string(),
                _ => report.message.clear(),
            }

            let err = report.validate().unwrap_err();
            assert_eq!(err.to_string(), "Please fill in all required fields");
        }
    }

    #[test]
    fn test_name_is_optional() {
        let mut report = complete_report();
        report.name.clear();
        assert!(report.validate().is_ok());
        assert_eq!(report.reporter(), "Anonymous");

        assert_eq!(complete_report().reporter(), "Jordan");
    }
}
