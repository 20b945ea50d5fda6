use std::collections::HashMap;

use chrono::NaiveDate;

use crate::entities::{CostTrend, LocationPattern, Visit};

use super::{
    utils::{
        efficiency_score, mean, HIGH_AVERAGE_COST, MIN_ROUTINE_VISITS,
        PER_VISIT_EFFICIENCY_DIVISOR,
    },
    visit_log::{display_label, group_key},
};

/// Computes per-location visit patterns from the flattened visit list. Pure
/// and order-independent up to the documented tie-breaks: output is sorted by
/// visit count descending, ties keeping first-seen order.
pub(crate) struct PatternAnalyzer<'a> {
    visits: &'a [Visit],
}

struct LocationAcc {
    label: String,
    /// (date, cost) in input order; sorted by date before trend windows.
    visits: Vec<(NaiveDate, f64)>,
    total_cost: f64,
    last_visited: NaiveDate,
    /// Transport key -> (display label, count).
    transport_usage: HashMap<String, (String, usize)>,
}

impl<'a> PatternAnalyzer<'a> {
    pub(crate) fn new(visits: &'a [Visit]) -> Self {
        Self { visits }
    }

    pub(crate) fn process(self) -> Vec<LocationPattern> {
        let mut order: Vec<String> = Vec::new();
        let mut accs: HashMap<String, LocationAcc> = HashMap::new();

        for visit in self.visits {
            let key = group_key(&visit.location);
            let acc = accs.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                LocationAcc {
                    label: display_label(&visit.location),
                    visits: Vec::new(),
                    total_cost: 0.0,
                    last_visited: visit.date,
                    transport_usage: HashMap::new(),
                }
            });
            acc.visits.push((visit.date, visit.cost));
            acc.total_cost += visit.cost;
            acc.last_visited = acc.last_visited.max(visit.date);
            acc.transport_usage
                .entry(group_key(&visit.transportation))
                .or_insert_with(|| (display_label(&visit.transportation), 0))
                .1 += 1;
        }

        let mut patterns: Vec<LocationPattern> = order
            .into_iter()
            .filter_map(|key| accs.remove(&key))
            .map(|mut acc| {
                let visit_count = acc.visits.len();
                let average_cost = acc.total_cost / (visit_count as f64);
                acc.visits.sort_by_key(|(date, _)| *date);
                let costs: Vec<f64> = acc.visits.iter().map(|(_, cost)| *cost).collect();
                let cost_trend = classify_trend(&costs);
                LocationPattern {
                    recommendations: recommendations(
                        &acc.label,
                        visit_count,
                        average_cost,
                        cost_trend,
                    ),
                    location: acc.label,
                    visit_count,
                    total_cost: acc.total_cost,
                    average_cost,
                    transport_usage: acc
                        .transport_usage
                        .into_values()
                        .collect(),
                    last_visited: acc.last_visited,
                    cost_trend,
                    efficiency: efficiency_score(average_cost, PER_VISIT_EFFICIENCY_DIVISOR),
                }
            })
            .collect();

        patterns.sort_by(|a, b| b.visit_count.cmp(&a.visit_count));
        patterns
    }
}

/// Compares the mean of the last three visits against the mean of the first
/// three, on chronologically sorted costs. The windows overlap when fewer
/// than six visits exist. With fewer than two entries in either window the
/// trend defaults to stable.
fn classify_trend(chronological_costs: &[f64]) -> CostTrend {
    let n = chronological_costs.len();
    let recent = &chronological_costs[n.saturating_sub(3)..];
    let older = &chronological_costs[..n.min(3)];
    if recent.len() < 2 || older.len() < 2 {
        return CostTrend::Stable;
    }
    let recent_mean = mean(recent);
    let older_mean = mean(older);
    if recent_mean > older_mean * 1.1 {
        CostTrend::Increasing
    } else if recent_mean < older_mean * 0.9 {
        CostTrend::Decreasing
    } else {
        CostTrend::Stable
    }
}

/// Independent rules; every matching rule fires.
fn recommendations(
    label: &str,
    visit_count: usize,
    average_cost: f64,
    cost_trend: CostTrend,
) -> Vec<String> {
    let mut out = Vec::new();
    if average_cost > HIGH_AVERAGE_COST {
        out.push(format!(
            "Average cost at {} is {:.0}; consider cheaper transportation options.",
            label, average_cost
        ));
    }
    if visit_count < MIN_ROUTINE_VISITS {
        out.push(format!(
            "{} has only {} visit(s); review whether trips there are necessary.",
            label, visit_count
        ));
    }
    if cost_trend == CostTrend::Increasing {
        out.push(format!(
            "Costs at {} are trending upward; monitor spending.",
            label
        ));
    }
    out
}
