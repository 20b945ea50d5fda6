use std::collections::HashMap;

use regex::Regex;

use crate::{entities::VisitAnalysis, errors::ReportError};

/// Template the narrator fills from computed figures before calling the
/// endpoint. The `{{Key}}` placeholders keep the prompt reviewable as one
/// block of text.
pub(crate) const INSIGHT_PROMPT_TEMPLATE: &str = "\
You are summarizing field-visit expense data for a loan officer's manager.
Totals: {{TotalSpent}} spent across {{TotalVisits}} visits \
(average {{AveragePerVisit}} per visit, cost efficiency {{CostEfficiency}}).
Most visited locations: {{TopLocations}}.
Monthly trend: {{MonthlyTrend}}.
Write a short plain-language summary (3-4 sentences) of spending patterns \
and one concrete cost-saving suggestion.";

pub(crate) fn build_insight_prompt(analysis: &VisitAnalysis) -> Result<String, ReportError> {
    let insights = &analysis.insights;
    let top_locations = if analysis.patterns.is_empty() {
        "none".to_string()
    } else {
        analysis
            .patterns
            .iter()
            .take(3)
            .map(|p| p.location.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let placeholders: HashMap<String, String> = [
        ("TotalSpent", format!("{:.2}", insights.total_spent)),
        ("TotalVisits", insights.total_visits.to_string()),
        (
            "AveragePerVisit",
            format!("{:.2}", insights.average_per_visit),
        ),
        ("CostEfficiency", insights.cost_efficiency.to_string()),
        ("TopLocations", top_locations),
        ("MonthlyTrend", format!("{:+.2}", insights.monthly_trend)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    replace_all_placeholders(INSIGHT_PROMPT_TEMPLATE.to_string(), &placeholders, true)
}

pub(crate) fn replace_all_placeholders(
    content: String,
    placeholders: &HashMap<String, String>,
    error_if_unreplaced_placeholders_remain: bool,
) -> Result<String, ReportError> {
    // Use a regex to find placeholders of the form {{Key}}.
    let placeholder_pattern =
        Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid");

    let mut unknown_keys = Vec::new();
    let result = placeholder_pattern.replace_all(&content, |caps: &regex::Captures| {
        let key = &caps[1]; // The content inside {{ }}.
        if let Some(value) = placeholders.get(key) {
            value.clone()
        } else {
            unknown_keys.push(key.to_string());
            caps[0].to_string() // The full '{{Key}}' string.
        }
    });

    let replaced_content = result.into_owned();

    if error_if_unreplaced_placeholders_remain && !unknown_keys.is_empty() {
        return Err(ReportError::UnreplacedPlaceholders { keys: unknown_keys });
    }

    Ok(replaced_content)
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        logic::visit_log::fixtures::report,
        usecases::analyze_reports_usecase::AnalyzeReportsUsecase,
    };

    use super::*;

    #[test]
    fn prompt_carries_the_computed_figures() {
        let reports = vec![report(
            (2024, 1, 10),
            &[("Lekki", "Bus", 500.0), ("Ikeja", "Keke", 300.0)],
        )];
        let analysis = AnalyzeReportsUsecase::new().analyze(&reports);
        let prompt = build_insight_prompt(&analysis).unwrap();
        assert!(prompt.contains("800.00 spent across 2 visits"));
        assert!(prompt.contains("Lekki"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn unknown_placeholders_are_an_error_when_strict() {
        let result = replace_all_placeholders(
            "Hello {{Missing}}".to_string(),
            &HashMap::new(),
            true,
        );
        assert!(matches!(
            result,
            Err(ReportError::UnreplacedPlaceholders { .. })
        ));
    }
}
