use chrono::NaiveDate;

use super::report::ReportType;

/// One report item flattened together with its parent report's type and
/// date. This is the input shape of the aggregation engine.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct Visit {
    pub location: String,
    pub transportation: String,
    pub cost: f64,
    pub report_type: ReportType,
    pub date: NaiveDate,
}
