use std::collections::{hash_map::Entry, HashMap};

use crate::entities::{
    AreaCoverage, LocationPattern, OptimalRoute, Report, RouteAnalysis, RoutePair,
};

use super::{
    utils::{
        efficiency_score, BULK_EFFICIENCY_DIVISOR, PER_VISIT_EFFICIENCY_DIVISOR,
    },
    visit_log::{area_label, group_key},
};

const MAX_FREQUENT_PAIRS: usize = 10;
const OPTIMAL_ROUTE_STOPS: usize = 5;
const HOURS_PER_STOP: f64 = 2.0;

/// Route-level rollups: frequent `(from, to)` pairs, area coverage, and a
/// suggested visiting set. Consumes the report collection (for per-report
/// item adjacency) and the already-computed location patterns (for coverage
/// and the optimal route).
pub(crate) struct RouteAnalyzer<'a> {
    reports: &'a [Report],
    patterns: &'a [LocationPattern],
}

struct PairAcc {
    from: String,
    to: String,
    frequency: usize,
    total_cost: f64,
}

impl<'a> RouteAnalyzer<'a> {
    pub(crate) fn new(reports: &'a [Report], patterns: &'a [LocationPattern]) -> Self {
        Self { reports, patterns }
    }

    pub(crate) fn process(self) -> RouteAnalysis {
        RouteAnalysis {
            frequent_pairs: self.frequent_pairs(),
            coverage: self.coverage(),
            optimal_route: self.optimal_route(),
        }
    }

    /// Pairs lexicographically adjacent items within each report. This is the
    /// pairing rule of the system this crate replaces: items are re-sorted
    /// alphabetically first, so pairs do not represent actual travel order.
    /// Only the *from* item's cost is accumulated.
    fn frequent_pairs(&self) -> Vec<RoutePair> {
        let mut order: Vec<(String, String)> = Vec::new();
        let mut accs: HashMap<(String, String), PairAcc> = HashMap::new();

        for report in self.reports {
            let mut legs: Vec<(&str, String, f64)> = report
                .items
                .iter()
                .map(|item| (item.location.trim(), group_key(&item.location), item.cost))
                .collect();
            legs.sort_by(|a, b| a.1.cmp(&b.1));
            for window in legs.windows(2) {
                let (from_label, from_key, from_cost) = &window[0];
                let (to_label, to_key, _) = &window[1];
                let key = (from_key.clone(), to_key.clone());
                let acc = accs.entry(key.clone()).or_insert_with(|| {
                    order.push(key);
                    PairAcc {
                        from: from_label.to_string(),
                        to: to_label.to_string(),
                        frequency: 0,
                        total_cost: 0.0,
                    }
                });
                acc.frequency += 1;
                acc.total_cost += from_cost;
            }
        }

        let mut pairs: Vec<RoutePair> = order
            .into_iter()
            .filter_map(|key| accs.remove(&key))
            .map(|acc| {
                let average_cost = acc.total_cost / (acc.frequency as f64);
                RoutePair {
                    from: acc.from,
                    to: acc.to,
                    frequency: acc.frequency,
                    total_cost: acc.total_cost,
                    average_cost,
                    efficiency: efficiency_score(average_cost, PER_VISIT_EFFICIENCY_DIVISOR),
                }
            })
            .collect();
        pairs.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        pairs.truncate(MAX_FREQUENT_PAIRS);
        pairs
    }

    /// Area rollup over the location patterns, folded in pattern output
    /// order. The average is a running pairwise `(old + new) / 2`, not a
    /// visit-weighted mean; kept as-is for compatibility.
    fn coverage(&self) -> Vec<AreaCoverage> {
        let mut order: Vec<String> = Vec::new();
        let mut areas: HashMap<String, AreaCoverage> = HashMap::new();

        for pattern in self.patterns {
            let label = area_label(&pattern.location);
            match areas.entry(group_key(&label)) {
                Entry::Vacant(entry) => {
                    order.push(entry.key().clone());
                    entry.insert(AreaCoverage {
                        area: label,
                        visit_count: pattern.visit_count,
                        last_visit: pattern.last_visited,
                        average_cost: pattern.average_cost,
                    });
                }
                Entry::Occupied(mut entry) => {
                    let area = entry.get_mut();
                    area.visit_count += pattern.visit_count;
                    area.last_visit = area.last_visit.max(pattern.last_visited);
                    area.average_cost = (area.average_cost + pattern.average_cost) / 2.0;
                }
            }
        }

        order
            .into_iter()
            .filter_map(|key| areas.remove(&key))
            .collect()
    }

    /// Top locations by visit count with placeholder cost/time estimates.
    fn optimal_route(&self) -> OptimalRoute {
        if self.patterns.is_empty() {
            return OptimalRoute {
                locations: Vec::new(),
                estimated_cost: 0.0,
                estimated_time_hours: 0.0,
                efficiency: 0.0,
            };
        }
        let stops: Vec<&LocationPattern> =
            self.patterns.iter().take(OPTIMAL_ROUTE_STOPS).collect();
        let estimated_cost: f64 = stops.iter().map(|p| p.average_cost).sum();
        OptimalRoute {
            locations: stops.iter().map(|p| p.location.clone()).collect(),
            estimated_cost,
            estimated_time_hours: HOURS_PER_STOP * (stops.len() as f64),
            efficiency: efficiency_score(estimated_cost, BULK_EFFICIENCY_DIVISOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{
        pattern_analyzer::PatternAnalyzer,
        visit_log::{self, fixtures::report},
    };
    use super::*;

    fn analyze(reports: &[Report]) -> RouteAnalysis {
        let visits = visit_log::flatten(reports);
        let patterns = PatternAnalyzer::new(&visits).process();
        RouteAnalyzer::new(reports, &patterns).process()
    }

    #[test]
    fn empty_collection_yields_empty_analysis() {
        let analysis = analyze(&[]);
        assert!(analysis.frequent_pairs.is_empty());
        assert!(analysis.coverage.is_empty());
        assert!(analysis.optimal_route.locations.is_empty());
        assert_eq!(analysis.optimal_route.estimated_cost, 0.0);
    }

    #[test]
    fn pairs_follow_sorted_order_not_entry_order() {
        // Items entered C, A, B. After the alphabetical resort the pairs are
        // (A, B) and (B, C) regardless of entry order. Documented quirk of
        // the system this crate replaces, not a travel-order chain.
        let reports = vec![report(
            (2024, 1, 10),
            &[("C", "Bus", 900.0), ("A", "Keke", 100.0), ("B", "Bus", 200.0)],
        )];
        let analysis = analyze(&reports);
        let keys: Vec<(&str, &str)> = analysis
            .frequent_pairs
            .iter()
            .map(|p| (p.from.as_str(), p.to.as_str()))
            .collect();
        assert_eq!(keys, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn pair_cost_counts_only_the_from_item() {
        let reports = vec![report(
            (2024, 1, 10),
            &[("A", "Keke", 100.0), ("B", "Bus", 200.0)],
        )];
        let analysis = analyze(&reports);
        let pair = &analysis.frequent_pairs[0];
        assert_eq!(pair.frequency, 1);
        assert_eq!(pair.total_cost, 100.0);
        assert_eq!(pair.average_cost, 100.0);
        assert_eq!(pair.efficiency, 98.0);
    }

    #[test]
    fn keeps_at_most_ten_pairs_by_frequency() {
        // Twelve distinct adjacent pairs from one twelve-plus-one item
        // report, plus one repeated pair from extra reports to pin ordering.
        let many: Vec<(String, String, f64)> = (0..13)
            .map(|i| (format!("L{:02}", i), "Bus".to_string(), 100.0))
            .collect();
        let many_refs: Vec<(&str, &str, f64)> = many
            .iter()
            .map(|(l, t, c)| (l.as_str(), t.as_str(), *c))
            .collect();
        let mut reports = vec![report((2024, 1, 10), &many_refs)];
        for day in 1..=3 {
            reports.push(report(
                (2024, 2, day),
                &[("L00", "Bus", 100.0), ("L01", "Bus", 100.0)],
            ));
        }
        let analysis = analyze(&reports);
        assert_eq!(analysis.frequent_pairs.len(), 10);
        assert_eq!(analysis.frequent_pairs[0].from, "L00");
        assert_eq!(analysis.frequent_pairs[0].frequency, 4);
    }

    #[test]
    fn coverage_groups_by_text_before_comma() {
        let reports = vec![report(
            (2024, 1, 10),
            &[
                ("Lekki, Lagos", "Bus", 100.0),
                ("Lekki, Epe Expressway", "Bus", 300.0),
                ("Ibadan", "Bus", 500.0),
            ],
        )];
        let analysis = analyze(&reports);
        assert_eq!(analysis.coverage.len(), 2);
        let lekki = analysis
            .coverage
            .iter()
            .find(|a| a.area == "Lekki")
            .unwrap();
        assert_eq!(lekki.visit_count, 2);
    }

    #[test]
    fn coverage_average_is_pairwise_fold() {
        // Three single-visit locations in one area with averages 100, 300,
        // 500. A true mean would be 300; the pairwise fold over pattern
        // order gives ((100 + 300) / 2 + 500) / 2 = 350. Kept for
        // compatibility.
        let reports = vec![
            report((2024, 1, 10), &[("Aja, X", "Bus", 100.0)]),
            report((2024, 1, 11), &[("Aja, Y", "Bus", 300.0)]),
            report((2024, 1, 12), &[("Aja, Z", "Bus", 500.0)]),
        ];
        let analysis = analyze(&reports);
        assert_eq!(analysis.coverage.len(), 1);
        assert_eq!(analysis.coverage[0].average_cost, 350.0);
    }

    #[test]
    fn optimal_route_takes_top_five_locations() {
        let mut reports = Vec::new();
        for i in 0..7u32 {
            // Location L<i> gets (7 - i) visits at cost 100 each.
            for day in 0..(7 - i) {
                reports.push(report(
                    (2024, 3, 1 + day),
                    &[(format!("L{}", i).as_str(), "Bus", 100.0)],
                ));
            }
        }
        let analysis = analyze(&reports);
        let route = &analysis.optimal_route;
        assert_eq!(route.locations.len(), 5);
        assert_eq!(route.locations[0], "L0");
        assert_eq!(route.estimated_cost, 500.0);
        assert_eq!(route.estimated_time_hours, 10.0);
        assert_eq!(route.efficiency, 95.0);
    }
}
