/// Derived statistics for one transportation mode across all visits.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct TransportModeStats {
    /// Display label (trimmed first-seen spelling).
    pub mode: String,
    pub usage_count: usize,
    pub total_cost: f64,
    pub average_cost: f64,
    /// `max(0, 100 - average_cost / 100)`. Note the divisor differs from the
    /// per-location score; the two formulas are intentionally distinct.
    pub efficiency: f64,
    /// Sentences templated from the computed numbers.
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}
