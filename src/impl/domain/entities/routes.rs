use chrono::NaiveDate;

/// A `(from, to)` location pair derived from lexicographically adjacent items
/// within one report, aggregated across all reports.
///
/// Pairing follows the sorted item order rather than the order items were
/// entered; this matches the system this crate replaces. Cost statistics
/// accumulate the *from* item's cost only.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct RoutePair {
    pub from: String,
    pub to: String,
    pub frequency: usize,
    pub total_cost: f64,
    pub average_cost: f64,
    pub efficiency: f64,
}

/// Area-level rollup of location patterns. The area key is the text before
/// the first comma of the location label (or the whole label).
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct AreaCoverage {
    pub area: String,
    pub visit_count: usize,
    pub last_visit: NaiveDate,
    /// Running pairwise average of member locations' average costs, folded in
    /// pattern output order. Not a visit-weighted mean.
    pub average_cost: f64,
}

/// Suggested visiting set: the top locations by visit count with placeholder
/// cost/time estimates.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct OptimalRoute {
    pub locations: Vec<String>,
    pub estimated_cost: f64,
    /// Two hours per location; a placeholder, not derived from distances.
    pub estimated_time_hours: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct RouteAnalysis {
    /// Top pairs by frequency, at most ten.
    pub frequent_pairs: Vec<RoutePair>,
    pub coverage: Vec<AreaCoverage>,
    pub optimal_route: OptimalRoute,
}
