use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::ReportError;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ReportId(pub(crate) Uuid);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ItemId(pub(crate) Uuid);

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    Verification,
    Recovery,
    PostDisbursement,
}

/// One location-visit line item with a transport mode and cost.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ReportItem {
    pub id: ItemId,
    pub location: String,
    pub transportation: String,
    pub cost: f64,
}

/// One submitted field-visit record: line items plus payee banking details.
/// Immutable once persisted; edits go through a full-record replace.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct Report {
    pub id: ReportId,
    pub report_type: ReportType,
    pub report_date: NaiveDate,
    pub description: Option<String>,
    /// Insertion order; not semantically meaningful besides display.
    pub items: Vec<ReportItem>,
    /// Denormalized sum of item costs, fixed at create/replace time.
    pub total_cost: f64,
    pub account_number: String,
    pub account_name: String,
    pub bank_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Pre-persistence shapes.
// ---

#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub location: String,
    pub transportation: String,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDraft {
    pub report_type: ReportType,
    pub report_date: NaiveDate,
    pub description: Option<String>,
    pub items: Vec<DraftItem>,
    pub account_number: String,
    pub account_name: String,
    pub bank_name: String,
}

// --

impl ReportId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl ItemId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Verification => "verification",
            ReportType::Recovery => "recovery",
            ReportType::PostDisbursement => "post-disbursement",
        }
    }

    /// Human label used in exports.
    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Verification => "Verification",
            ReportType::Recovery => "Recovery",
            ReportType::PostDisbursement => "Post-Disbursement",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ReportType {
    type Err = ReportError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verification" => Ok(ReportType::Verification),
            "recovery" => Ok(ReportType::Recovery),
            "post-disbursement" => Ok(ReportType::PostDisbursement),
            other => Err(ReportError::InvalidReportType {
                value: other.to_string(),
            }),
        }
    }
}

impl ReportDraft {
    /// Sum of item costs. Persisted as the report's denormalized `total_cost`.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|i| i.cost).sum()
    }

    /// Rejects the draft before any persistence call. An item without a
    /// location, without a transportation mode, or with a non-positive cost
    /// counts as incomplete.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.account_number.trim().is_empty() {
            return Err(ReportError::MissingField {
                field: "account_number",
            });
        }
        if self.account_name.trim().is_empty() {
            return Err(ReportError::MissingField {
                field: "account_name",
            });
        }
        if self.bank_name.trim().is_empty() {
            return Err(ReportError::MissingField { field: "bank_name" });
        }
        if self.items.is_empty() {
            return Err(ReportError::NoItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.location.trim().is_empty()
                || item.transportation.trim().is_empty()
                || item.cost <= 0.0
            {
                return Err(ReportError::IncompleteItem { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReportDraft {
        ReportDraft {
            report_type: ReportType::Verification,
            report_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            description: None,
            items: vec![
                DraftItem {
                    location: "Lekki".to_string(),
                    transportation: "Bus".to_string(),
                    cost: 500.0,
                },
                DraftItem {
                    location: "Ikeja".to_string(),
                    transportation: "Keke".to_string(),
                    cost: 300.0,
                },
            ],
            account_number: "0123456789".to_string(),
            account_name: "Field Officer".to_string(),
            bank_name: "GTBank".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes_and_totals_items() {
        let d = draft();
        assert!(d.validate().is_ok());
        assert_eq!(d.total_cost(), 800.0);
    }

    #[test]
    fn zero_cost_item_is_incomplete() {
        let mut d = draft();
        d.items[1].cost = 0.0;
        assert!(matches!(
            d.validate(),
            Err(ReportError::IncompleteItem { index: 1 })
        ));
    }

    #[test]
    fn blank_banking_field_is_missing() {
        let mut d = draft();
        d.bank_name = "  ".to_string();
        assert!(matches!(
            d.validate(),
            Err(ReportError::MissingField { field: "bank_name" })
        ));
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let mut d = draft();
        d.items.clear();
        assert!(matches!(d.validate(), Err(ReportError::NoItems)));
    }

    #[test]
    fn report_type_round_trips_through_str() {
        for t in [
            ReportType::Verification,
            ReportType::Recovery,
            ReportType::PostDisbursement,
        ] {
            assert_eq!(t.as_str().parse::<ReportType>().unwrap(), t);
        }
        assert!("audit".parse::<ReportType>().is_err());
    }
}
