use super::{
    patterns::LocationPattern, routes::RouteAnalysis, transport::TransportModeStats,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, serde_derive::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostEfficiency {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for CostEfficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CostEfficiency::High => "high",
            CostEfficiency::Medium => "medium",
            CostEfficiency::Low => "low",
        })
    }
}

/// Fixed-multiplier extrapolations, not regression-based.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct CostForecast {
    pub next_month: f64,
    pub next_quarter: f64,
}

/// Rolled-up summary over the whole report collection.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct InsightsSummary {
    pub total_spent: f64,
    pub total_visits: usize,
    pub average_per_visit: f64,
    /// Difference between the last two monthly cost buckets (chronological);
    /// zero when fewer than two months of data exist.
    pub monthly_trend: f64,
    pub cost_efficiency: CostEfficiency,
    pub projected_annual_cost: f64,
    pub visits_per_month: f64,
    pub cost_forecast: CostForecast,
    pub potential_savings: f64,
}

/// Classification cut-offs for `cost_efficiency`, in currency units per
/// visit. Currency-dependent, hence configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightThresholds {
    /// Below this average per visit: `High`.
    pub high_below: f64,
    /// Above this average per visit: `Low`.
    pub low_above: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            high_below: 1000.0,
            low_above: 3000.0,
        }
    }
}

/// Output of a full aggregation pass over the report collection.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct VisitAnalysis {
    pub patterns: Vec<LocationPattern>,
    pub routes: RouteAnalysis,
    pub transport_modes: Vec<TransportModeStats>,
    pub insights: InsightsSummary,
}
