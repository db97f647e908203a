use serde::{Deserialize, Serialize};

/// Where the aggregator reads risk and health scores from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    /// Use the cached `risk_score` / `health_score` columns as written.
    #[default]
    Stored,
    /// Recompute both from system state on every read.
    Derived,
}

/// Tunables for the dashboard reduction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardSettings {
    /// Length of every ranked list.
    pub top_n: usize,
    /// Minimum risk for a system to be listed as critical.
    pub critical_threshold: u8,
    /// Minimum risk for a system to count as an urgent item.
    pub urgent_threshold: u8,
    pub score_source: ScoreSource,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_n: 5,
            critical_threshold: 50,
            urgent_threshold: 70,
            score_source: ScoreSource::Stored,
        }
    }
}

impl DashboardSettings {
    pub fn derived() -> Self {
        Self {
            score_source: ScoreSource::Derived,
            ..Self::default()
        }
    }
}
