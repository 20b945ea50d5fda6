use crate::entities::{Report, Visit};

/// Flattens the report collection into one visit per line item, each tagged
/// with its parent report's type and date. Report order, then item insertion
/// order, is preserved.
pub(crate) fn flatten(reports: &[Report]) -> Vec<Visit> {
    reports
        .iter()
        .flat_map(|report| {
            report.items.iter().map(|item| Visit {
                location: item.location.clone(),
                transportation: item.transportation.clone(),
                cost: item.cost,
                report_type: report.report_type,
                date: report.report_date,
            })
        })
        .collect()
}

/// Normalized grouping key for the free-text `location` and `transportation`
/// labels: trimmed and case-folded, so "Lekki" and "lekki " land in the same
/// bucket.
pub(crate) fn group_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Trimmed display spelling. Grouped outputs show the first-seen label.
pub(crate) fn display_label(raw: &str) -> String {
    raw.trim().to_string()
}

/// Coarse area label: the text before the first comma, or the whole label.
pub(crate) fn area_label(location: &str) -> String {
    display_label(location.split(',').next().unwrap_or(location))
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{fixtures::report, *};

    #[test]
    fn flatten_tags_items_with_parent_date() {
        let reports = vec![
            report((2024, 1, 10), &[("Lekki", "Bus", 500.0)]),
            report(
                (2024, 2, 11),
                &[("Ikeja", "Keke", 300.0), ("Yaba", "Bus", 250.0)],
            ),
        ];
        let visits = flatten(&reports);
        assert_eq!(visits.len(), 3);
        assert_eq!(visits[0].location, "Lekki");
        assert_eq!(
            visits[1].date,
            NaiveDate::from_ymd_opt(2024, 2, 11).unwrap()
        );
        assert_eq!(visits[2].transportation, "Bus");
    }

    #[test]
    fn group_key_trims_and_folds_case() {
        assert_eq!(group_key("Lekki"), group_key("lekki "));
        assert_ne!(group_key("Lekki"), group_key("Lekki Phase 1"));
    }

    #[test]
    fn area_label_cuts_at_first_comma() {
        assert_eq!(area_label("Lekki Phase 1, Lagos"), "Lekki Phase 1");
        assert_eq!(area_label("Ibadan"), "Ibadan");
    }
}
