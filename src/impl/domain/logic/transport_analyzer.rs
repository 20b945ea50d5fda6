use std::collections::HashMap;

use crate::entities::{TransportModeStats, Visit};

use super::{
    utils::{
        efficiency_score, safe_div, BULK_EFFICIENCY_DIVISOR, HIGH_AVERAGE_COST,
        MIN_ROUTINE_VISITS,
    },
    visit_log::{display_label, group_key},
};

/// Per-transport-mode usage and cost statistics. The insight sentences are
/// templated from the computed numbers; no inference endpoint is involved.
pub(crate) struct TransportAnalyzer<'a> {
    visits: &'a [Visit],
}

struct ModeAcc {
    label: String,
    usage_count: usize,
    total_cost: f64,
}

impl<'a> TransportAnalyzer<'a> {
    pub(crate) fn new(visits: &'a [Visit]) -> Self {
        Self { visits }
    }

    pub(crate) fn process(self) -> Vec<TransportModeStats> {
        let mut order: Vec<String> = Vec::new();
        let mut accs: HashMap<String, ModeAcc> = HashMap::new();

        for visit in self.visits {
            let key = group_key(&visit.transportation);
            let acc = accs.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                ModeAcc {
                    label: display_label(&visit.transportation),
                    usage_count: 0,
                    total_cost: 0.0,
                }
            });
            acc.usage_count += 1;
            acc.total_cost += visit.cost;
        }

        let total_visits = self.visits.len();
        let mut modes: Vec<TransportModeStats> = order
            .into_iter()
            .filter_map(|key| accs.remove(&key))
            .map(|acc| {
                let average_cost = acc.total_cost / (acc.usage_count as f64);
                let efficiency = efficiency_score(average_cost, BULK_EFFICIENCY_DIVISOR);
                TransportModeStats {
                    insights: insights(
                        &acc.label,
                        acc.usage_count,
                        total_visits,
                        average_cost,
                        efficiency,
                    ),
                    recommendations: recommendations(&acc.label, acc.usage_count, average_cost),
                    mode: acc.label,
                    usage_count: acc.usage_count,
                    total_cost: acc.total_cost,
                    average_cost,
                    efficiency,
                }
            })
            .collect();

        modes.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
        modes
    }
}

fn insights(
    label: &str,
    usage_count: usize,
    total_visits: usize,
    average_cost: f64,
    efficiency: f64,
) -> Vec<String> {
    let share = 100.0 * safe_div(usage_count as f64, total_visits as f64);
    vec![
        format!(
            "{} was used for {} of {} visits ({:.0}% of all trips).",
            label, usage_count, total_visits, share
        ),
        format!(
            "Average cost per trip on {} is {:.2}, scoring {:.1} on efficiency.",
            label, average_cost, efficiency
        ),
    ]
}

fn recommendations(label: &str, usage_count: usize, average_cost: f64) -> Vec<String> {
    let mut out = Vec::new();
    if average_cost > HIGH_AVERAGE_COST {
        out.push(format!(
            "Average cost per trip on {} is {:.0}; consider a cheaper alternative.",
            label, average_cost
        ));
    }
    if usage_count < MIN_ROUTINE_VISITS {
        out.push(format!(
            "{} is rarely used ({} trip(s)).",
            label, usage_count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::visit_log::fixtures::visit;
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(TransportAnalyzer::new(&[]).process().is_empty());
    }

    #[test]
    fn groups_by_normalized_mode_label() {
        let visits = vec![
            visit("Lekki", "Keke", 200.0, (2024, 1, 1)),
            visit("Ikeja", "keke ", 400.0, (2024, 1, 2)),
            visit("Yaba", "Bus", 100.0, (2024, 1, 3)),
        ];
        let modes = TransportAnalyzer::new(&visits).process();
        assert_eq!(modes.len(), 2);
        let keke = &modes[0];
        assert_eq!(keke.mode, "Keke");
        assert_eq!(keke.usage_count, 2);
        assert_eq!(keke.total_cost, 600.0);
        assert_eq!(keke.average_cost, 300.0);
        assert_eq!(keke.efficiency, 97.0);
    }

    #[test]
    fn expensive_single_use_mode_is_clamped_to_zero() {
        let visits = vec![visit("Abuja", "Flight", 10_000.0, (2024, 1, 1))];
        let modes = TransportAnalyzer::new(&visits).process();
        assert_eq!(modes[0].efficiency, 0.0);
        // Both rules fire: expensive and rarely used.
        assert_eq!(modes[0].recommendations.len(), 2);
    }

    #[test]
    fn insight_sentences_carry_the_numbers() {
        let visits = vec![
            visit("Lekki", "Bus", 150.0, (2024, 1, 1)),
            visit("Ikeja", "Bus", 250.0, (2024, 1, 2)),
        ];
        let modes = TransportAnalyzer::new(&visits).process();
        assert!(modes[0].insights[0].contains("2 of 2 visits"));
        assert!(modes[0].insights[1].contains("200.00"));
    }
}
