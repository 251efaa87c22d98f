use serde::{Deserialize, Serialize};

/// Alert severity. Only `warning` gets its own accent; any other label
/// read from a data file is treated as `success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    #[default]
    Success,
    Warning,
}

impl From<String> for Severity {
    fn from(label: String) -> Self {
        Severity::from_label(&label)
    }
}

impl Severity {
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("warning") {
            Severity::Warning
        } else {
            Severity::Success
        }
    }

    pub fn is_warning(self) -> bool {
        self == Severity::Warning
    }

    /// CSS modifier for the alert icon.
    pub fn accent(self) -> &'static str {
        match self {
            Severity::Warning => "accent-yellow",
            Severity::Success => "accent-green",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Success => "success",
        }
    }
}

/// A short notification shown above the insights tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    #[serde(default)]
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(id: u32, severity: Severity, title: &str, message: &str) -> Self {
        Self {
            id,
            severity,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// First id that appears more than once, if any.
pub fn duplicate_id(alerts: &[Alert]) -> Option<u32> {
    let mut seen = std::collections::HashSet::new();
    alerts.iter().map(|a| a.id).find(|id| !seen.insert(*id))
}
