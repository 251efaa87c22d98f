use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::models::alert::{Alert, Severity, duplicate_id};
use crate::models::waste::WasteSample;

/// Source of the waste samples and alerts shown on the dashboard.
pub trait MetricsSource: Send + Sync {
    /// Samples in chronological order.
    fn samples(&self) -> Vec<WasteSample>;
    /// Alerts in display order.
    fn alerts(&self) -> Vec<Alert>;
}

/// Fixed sample set, either built in or read once from a JSON file at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticMetrics {
    #[serde(default)]
    pub samples: Vec<WasteSample>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl StaticMetrics {
    pub fn builtin() -> Self {
        Self {
            samples: vec![
                WasteSample::new("Jan", 450, 780, 240),
                WasteSample::new("Feb", 420, 800, 220),
                WasteSample::new("Mar", 380, 850, 200),
                WasteSample::new("Apr", 350, 900, 180),
            ],
            alerts: vec![
                Alert::new(1, Severity::Success, "Bin Nearly Full", "Sector A-12 approaching capacity"),
                Alert::new(2, Severity::Success, "Milestone Reached", "Community reduced plastic waste by 15%"),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let metrics: StaticMetrics = serde_json::from_str(json)?;
        if let Some(id) = duplicate_id(&metrics.alerts) {
            return Err(ConfigError::Invalid(format!("duplicate alert id {id}")));
        }
        Ok(metrics)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let metrics = Self::from_json(&json)?;
        log::info!(
            "Loaded dashboard data from {}: samples={}, alerts={}",
            path.display(),
            metrics.samples.len(),
            metrics.alerts.len()
        );
        Ok(metrics)
    }
}

impl MetricsSource for StaticMetrics {
    fn samples(&self) -> Vec<WasteSample> {
        self.samples.clone()
    }

    fn alerts(&self) -> Vec<Alert> {
        self.alerts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_months_in_order() {
        let m = StaticMetrics::builtin();
        let months: Vec<&str> = m.samples.iter().map(|s| s.month.as_str()).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr"]);
        assert_eq!(m.alerts.len(), 2);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let m = StaticMetrics::from_json("{}").unwrap();
        assert!(m.samples.is_empty());
        assert!(m.alerts.is_empty());
    }

    #[test]
    fn rejects_duplicate_alert_ids() {
        let json = r#"{"alerts": [
            {"id": 4, "title": "a", "message": "b"},
            {"id": 4, "title": "c", "message": "d"}
        ]}"#;
        assert!(matches!(StaticMetrics::from_json(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_negative_amounts() {
        let json = r#"{"samples": [{"month": "Jan", "plastic": -1, "organic": 0, "metal": 0}]}"#;
        assert!(matches!(StaticMetrics::from_json(json), Err(ConfigError::Parse(_))));
    }
}
