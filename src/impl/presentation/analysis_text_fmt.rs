use crate::entities::VisitAnalysis;

const WRAP_WIDTH: usize = 74;

/// Renders an aggregation run as a line-oriented plain-text summary for
/// download.
pub struct AnalysisTextPrinter;

impl AnalysisTextPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_summary(&self, analysis: &VisitAnalysis) -> String {
        let mut out = String::new();

        out.push_str(
            "--- Insights -----------------------------------------------------------\n\n",
        );
        self.print_insights(&mut out, analysis);
        out.push('\n');

        out.push_str(
            "--- Location patterns --------------------------------------------------\n\n",
        );
        self.print_patterns(&mut out, analysis);
        out.push('\n');

        out.push_str(
            "--- Routes -------------------------------------------------------------\n\n",
        );
        self.print_routes(&mut out, analysis);
        out.push('\n');

        out.push_str(
            "--- Transportation -----------------------------------------------------\n\n",
        );
        self.print_transport(&mut out, analysis);

        out
    }

    fn print_insights(&self, out: &mut String, analysis: &VisitAnalysis) {
        let insights = &analysis.insights;
        out.push_str(&format!("Total spent:        {:.2}\n", insights.total_spent));
        out.push_str(&format!("Visits:             {}\n", insights.total_visits));
        out.push_str(&format!(
            "Average per visit:  {:.2}\n",
            insights.average_per_visit
        ));
        out.push_str(&format!(
            "Monthly trend:      {:+.2}\n",
            insights.monthly_trend
        ));
        out.push_str(&format!(
            "Cost efficiency:    {}\n",
            insights.cost_efficiency
        ));
        out.push_str(&format!(
            "Projected annual:   {:.2}\n",
            insights.projected_annual_cost
        ));
        out.push_str(&format!(
            "Visits per month:   {:.1}\n",
            insights.visits_per_month
        ));
        out.push_str(&format!(
            "Forecast:           {:.2} next month, {:.2} next quarter\n",
            insights.cost_forecast.next_month, insights.cost_forecast.next_quarter
        ));
        out.push_str(&format!(
            "Potential savings:  {:.2}\n",
            insights.potential_savings
        ));
    }

    fn print_patterns(&self, out: &mut String, analysis: &VisitAnalysis) {
        if analysis.patterns.is_empty() {
            out.push_str("No visits recorded.\n");
            return;
        }
        for pattern in &analysis.patterns {
            out.push_str(&format!(
                "{}: {} visit(s), avg {:.2}, trend {}, efficiency {:.1}\n",
                pattern.location,
                pattern.visit_count,
                pattern.average_cost,
                pattern.cost_trend,
                pattern.efficiency,
            ));
            for recommendation in &pattern.recommendations {
                for line in textwrap::wrap(recommendation, WRAP_WIDTH) {
                    out.push_str(&format!("  - {}\n", line));
                }
            }
        }
    }

    fn print_routes(&self, out: &mut String, analysis: &VisitAnalysis) {
        for pair in &analysis.routes.frequent_pairs {
            out.push_str(&format!(
                "{} -> {}: {} trip(s), avg {:.2}\n",
                pair.from, pair.to, pair.frequency, pair.average_cost
            ));
        }
        let route = &analysis.routes.optimal_route;
        if !route.locations.is_empty() {
            out.push_str(&format!(
                "Suggested round: {} (est. cost {:.2}, {:.0} h)\n",
                route.locations.join(", "),
                route.estimated_cost,
                route.estimated_time_hours,
            ));
        }
    }

    fn print_transport(&self, out: &mut String, analysis: &VisitAnalysis) {
        for mode in &analysis.transport_modes {
            out.push_str(&format!(
                "{}: {} trip(s), total {:.2}, efficiency {:.1}\n",
                mode.mode, mode.usage_count, mode.total_cost, mode.efficiency
            ));
            for sentence in mode.insights.iter().chain(&mode.recommendations) {
                for line in textwrap::wrap(sentence, WRAP_WIDTH) {
                    out.push_str(&format!("  - {}\n", line));
                }
            }
        }
    }
}

impl Default for AnalysisTextPrinter {
    fn default() -> Self {
        Self::new()
    }
}
