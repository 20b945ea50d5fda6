use std::collections::HashMap;

use chrono::NaiveDate;

/// Classification of recent spending at a location relative to its older
/// visits.
#[derive(Debug, PartialEq, Eq, Clone, Copy, serde_derive::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl std::fmt::Display for CostTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CostTrend::Increasing => "increasing",
            CostTrend::Decreasing => "decreasing",
            CostTrend::Stable => "stable",
        })
    }
}

/// Derived per-location statistics over all visits to that location.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct LocationPattern {
    /// Display label (trimmed first-seen spelling; grouping itself is
    /// case-insensitive).
    pub location: String,
    pub visit_count: usize,
    pub total_cost: f64,
    pub average_cost: f64,
    /// Transportation label -> number of visits using it.
    pub transport_usage: HashMap<String, usize>,
    pub last_visited: NaiveDate,
    pub cost_trend: CostTrend,
    /// `max(0, 100 - average_cost / 50)`. Bounded below, not above.
    pub efficiency: f64,
    pub recommendations: Vec<String>,
}
