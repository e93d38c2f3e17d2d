use serde::{Deserialize, Serialize};

/// Alert classification of one material's aggregated stock.
///
/// One closed enum shared by aggregation, notification, and the API surface;
/// presentation layers map these to badges, never re-declare them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Total quantity at or below the minimum alert threshold.
    Critical,
    /// Above the threshold but within the warning band.
    Warning,
    /// Comfortably above the warning band.
    Normal,
    /// No threshold configured (the material has no stock records).
    Unknown,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "critical",
            AlertLevel::Warning => "warning",
            AlertLevel::Normal => "normal",
            AlertLevel::Unknown => "unknown",
        }
    }

    /// Levels that warrant operator attention.
    pub fn is_actionable(&self) -> bool {
        matches!(self, AlertLevel::Critical | AlertLevel::Warning)
    }
}

impl core::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&AlertLevel::Critical).unwrap(), "\"critical\"");
        assert_eq!(serde_json::to_string(&AlertLevel::Unknown).unwrap(), "\"unknown\"");
    }

    #[test]
    fn actionable_levels_are_critical_and_warning() {
        assert!(AlertLevel::Critical.is_actionable());
        assert!(AlertLevel::Warning.is_actionable());
        assert!(!AlertLevel::Normal.is_actionable());
        assert!(!AlertLevel::Unknown.is_actionable());
    }
}
