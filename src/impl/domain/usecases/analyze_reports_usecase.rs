use crate::{
    domain::logic::{
        insights_summarizer::InsightsSummarizer, pattern_analyzer::PatternAnalyzer,
        route_analyzer::RouteAnalyzer, transport_analyzer::TransportAnalyzer, visit_log,
    },
    entities::{InsightThresholds, Report, VisitAnalysis},
};

/// Runs the whole aggregation engine over the current report collection.
/// Pure and synchronous; recomputes everything from scratch on each call, so
/// it is safe to invoke on every render.
pub struct AnalyzeReportsUsecase {
    thresholds: InsightThresholds,
}

impl AnalyzeReportsUsecase {
    pub fn new() -> Self {
        Self {
            thresholds: InsightThresholds::default(),
        }
    }

    pub fn with_thresholds(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    pub fn analyze(&self, reports: &[Report]) -> VisitAnalysis {
        let visits = visit_log::flatten(reports);
        let patterns = PatternAnalyzer::new(&visits).process();
        let routes = RouteAnalyzer::new(reports, &patterns).process();
        let transport_modes = TransportAnalyzer::new(&visits).process();
        let insights = InsightsSummarizer::new(&visits, &self.thresholds).process();
        VisitAnalysis {
            patterns,
            routes,
            transport_modes,
            insights,
        }
    }
}

impl Default for AnalyzeReportsUsecase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::logic::visit_log::fixtures::report;

    use super::*;

    #[test]
    fn empty_collection_is_fully_defined() {
        let analysis = AnalyzeReportsUsecase::new().analyze(&[]);
        assert!(analysis.patterns.is_empty());
        assert!(analysis.transport_modes.is_empty());
        assert_eq!(analysis.insights.total_spent, 0.0);
        assert_eq!(analysis.insights.average_per_visit, 0.0);
    }

    #[test]
    fn per_location_totals_match_insights_total() {
        let reports = vec![
            report((2024, 1, 10), &[("Lekki", "Bus", 500.0), ("Ikeja", "Keke", 300.0)]),
            report((2024, 2, 12), &[("Lekki", "Bus", 700.0)]),
        ];
        let analysis = AnalyzeReportsUsecase::new().analyze(&reports);
        let per_location: f64 = analysis.patterns.iter().map(|p| p.total_cost).sum();
        assert_eq!(per_location, analysis.insights.total_spent);
        assert_eq!(analysis.insights.total_spent, 1500.0);
    }

    #[test]
    fn deleted_report_leaves_no_orphaned_contributions() {
        let keep = report((2024, 1, 10), &[("Lekki", "Bus", 500.0)]);
        let drop = report((2024, 1, 11), &[("Surulere", "Okada", 350.0)]);
        let before = AnalyzeReportsUsecase::new().analyze(&[keep.clone(), drop]);
        assert!(before.patterns.iter().any(|p| p.location == "Surulere"));

        let after = AnalyzeReportsUsecase::new().analyze(&[keep]);
        assert!(after.patterns.iter().all(|p| p.location != "Surulere"));
        assert!(after
            .transport_modes
            .iter()
            .all(|m| m.mode != "Okada"));
        assert_eq!(after.insights.total_spent, 500.0);
    }

    #[test]
    fn repeated_analysis_is_identical() {
        let reports = vec![report(
            (2024, 1, 10),
            &[("Lekki", "Bus", 500.0), ("Ikeja", "Keke", 300.0)],
        )];
        let usecase = AnalyzeReportsUsecase::new();
        assert_eq!(usecase.analyze(&reports), usecase.analyze(&reports));
    }
}
