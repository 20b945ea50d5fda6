use std::collections::HashMap;

use crate::entities::{
    CostEfficiency, CostForecast, InsightThresholds, InsightsSummary, Visit,
};

use super::utils::{month_key, months_spanned, safe_div};

const ANNUAL_PROJECTION_MONTHS: f64 = 12.0;
const NEXT_MONTH_MULTIPLIER: f64 = 1.05;
const NEXT_QUARTER_MULTIPLIER: f64 = 3.15;
const SAVINGS_RATE: f64 = 0.15;

/// Top-level roll-up over the whole visit log. Total over empty input: every
/// figure is a plain zero rather than NaN or an error.
pub(crate) struct InsightsSummarizer<'a> {
    visits: &'a [Visit],
    thresholds: &'a InsightThresholds,
}

impl<'a> InsightsSummarizer<'a> {
    pub(crate) fn new(visits: &'a [Visit], thresholds: &'a InsightThresholds) -> Self {
        Self { visits, thresholds }
    }

    pub(crate) fn process(self) -> InsightsSummary {
        let total_visits = self.visits.len();
        let total_spent: f64 = self.visits.iter().map(|v| v.cost).sum();
        let average_per_visit = safe_div(total_spent, total_visits as f64);

        let cost_efficiency = if average_per_visit < self.thresholds.high_below {
            CostEfficiency::High
        } else if average_per_visit > self.thresholds.low_above {
            CostEfficiency::Low
        } else {
            CostEfficiency::Medium
        };

        let span_months = match (
            self.visits.iter().map(|v| v.date).min(),
            self.visits.iter().map(|v| v.date).max(),
        ) {
            (Some(earliest), Some(latest)) => months_spanned(earliest, latest),
            _ => 1,
        };

        InsightsSummary {
            total_spent,
            total_visits,
            average_per_visit,
            monthly_trend: self.monthly_trend(),
            cost_efficiency,
            projected_annual_cost: total_spent * ANNUAL_PROJECTION_MONTHS,
            visits_per_month: (total_visits as f64) / (span_months as f64),
            cost_forecast: CostForecast {
                next_month: total_spent * NEXT_MONTH_MULTIPLIER,
                next_quarter: total_spent * NEXT_QUARTER_MULTIPLIER,
            },
            potential_savings: total_spent * SAVINGS_RATE,
        }
    }

    /// Difference between the last two monthly cost buckets. Buckets are
    /// sorted chronologically by month key first, so the result does not
    /// depend on the order reports were inserted.
    fn monthly_trend(&self) -> f64 {
        let mut buckets: HashMap<String, f64> = HashMap::new();
        for visit in self.visits {
            *buckets.entry(month_key(visit.date)).or_insert(0.0) += visit.cost;
        }
        let mut months: Vec<(String, f64)> = buckets.into_iter().collect();
        months.sort_by(|a, b| a.0.cmp(&b.0));
        match months.as_slice() {
            [.., (_, earlier), (_, later)] => later - earlier,
            _ => 0.0,
        }
    }
}
