use chrono::{Datelike, NaiveDate};

/// Divisor of the per-visit efficiency score, used for location patterns and
/// route pairs.
pub(crate) const PER_VISIT_EFFICIENCY_DIVISOR: f64 = 50.0;

/// Divisor of the bulk efficiency score, used for transport modes and the
/// optimal-route estimate. Kept distinct from the per-visit divisor; the two
/// scores are independently reachable behaviors.
pub(crate) const BULK_EFFICIENCY_DIVISOR: f64 = 100.0;

/// Average cost above which a cheaper-transport recommendation fires.
pub(crate) const HIGH_AVERAGE_COST: f64 = 2000.0;

/// Visit count below which a location or mode is flagged as rarely used.
pub(crate) const MIN_ROUTINE_VISITS: usize = 3;

/// Linear-decay heuristic score, clamped at zero. There is no upper clamp;
/// very low averages can score above 100.
pub(crate) fn efficiency_score(average_cost: f64, divisor: f64) -> f64 {
    (100.0 - average_cost / divisor).max(0.0)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / (values.len() as f64)
}

/// Division that yields 0 instead of NaN/inf on a zero denominator. The
/// aggregation functions must stay total over empty collections.
pub(crate) fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Calendar-month bucket key, `YYYY-MM`. Lexicographic order on these keys is
/// chronological order.
pub(crate) fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Approximate number of months between the two dates: elapsed days divided
/// by 30, floored, at least 1. Not calendar-month aware.
pub(crate) fn months_spanned(earliest: NaiveDate, latest: NaiveDate) -> i64 {
    ((latest - earliest).num_days() / 30).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn efficiency_clamps_at_zero() {
        assert_eq!(efficiency_score(10_000.0, BULK_EFFICIENCY_DIVISOR), 0.0);
        assert_eq!(efficiency_score(0.0, PER_VISIT_EFFICIENCY_DIVISOR), 100.0);
        assert_eq!(efficiency_score(500.0, PER_VISIT_EFFICIENCY_DIVISOR), 90.0);
    }

    #[test]
    fn safe_div_handles_zero_denominator() {
        assert_eq!(safe_div(5.0, 0.0), 0.0);
        assert_eq!(safe_div(6.0, 3.0), 2.0);
    }

    #[test]
    fn month_key_is_zero_padded() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(month_key(d), "2024-03");
    }

    #[test]
    fn months_spanned_is_at_least_one() {
        let a = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(months_spanned(a, a), 1);
        let b = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        assert_eq!(months_spanned(a, b), 3);
    }
}
