use std::str::FromStr as _;

use uuid::Uuid;

use crate::{
    entities::{ItemId, Report, ReportId, ReportItem, UserId},
    errors::ReportError,
};

use super::{
    iso_date_model::{IsoDateModel, UtcTimestampModel},
    money_model,
};

/// One row of the `reports` record set, as exchanged with the persistence
/// collaborator.
#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ReportRowModel {
    pub id: String,
    pub user_id: String,
    pub report_type: String,
    pub report_date: String,
    #[serde(default)]
    pub description: Option<String>,
    pub total_cost: f64,
    pub account_number: String,
    pub account_name: String,
    pub bank_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One row of the `report_items` record set.
#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct ReportItemRowModel {
    pub id: String,
    pub report_id: String,
    pub location: String,
    pub transportation: String,
    #[serde(deserialize_with = "money_model::lenient_amount")]
    pub cost: f64,
}

// --

impl ReportRowModel {
    pub(crate) fn from_entity(user: &UserId, report: &Report) -> Self {
        Self {
            id: report.id.to_string(),
            user_id: user.to_string(),
            report_type: report.report_type.as_str().to_string(),
            report_date: report.report_date.format("%Y-%m-%d").to_string(),
            description: report.description.clone(),
            total_cost: report.total_cost,
            account_number: report.account_number.clone(),
            account_name: report.account_name.clone(),
            bank_name: report.bank_name.clone(),
            created_at: report.created_at.to_rfc3339(),
            updated_at: report.updated_at.to_rfc3339(),
        }
    }

    pub(crate) fn into_report(
        self,
        items: Vec<ReportItemRowModel>,
    ) -> Result<Report, ReportError> {
        Ok(Report {
            id: ReportId(parse_uuid(&self.id)?),
            report_type: self.report_type.parse()?,
            report_date: IsoDateModel::from_str(&self.report_date)?.into(),
            description: self.description,
            items: items
                .into_iter()
                .map(ReportItemRowModel::into_item)
                .collect::<Result<Vec<_>, _>>()?,
            total_cost: self.total_cost,
            account_number: self.account_number,
            account_name: self.account_name,
            bank_name: self.bank_name,
            created_at: UtcTimestampModel::from_str(&self.created_at)?.into(),
            updated_at: UtcTimestampModel::from_str(&self.updated_at)?.into(),
        })
    }
}

impl ReportItemRowModel {
    pub(crate) fn from_entity(report_id: &ReportId, item: &ReportItem) -> Self {
        Self {
            id: item.id.to_string(),
            report_id: report_id.to_string(),
            location: item.location.clone(),
            transportation: item.transportation.clone(),
            cost: item.cost,
        }
    }

    pub(crate) fn into_item(self) -> Result<ReportItem, ReportError> {
        Ok(ReportItem {
            id: ItemId(parse_uuid(&self.id)?),
            location: self.location,
            transportation: self.transportation,
            cost: self.cost,
        })
    }
}

fn parse_uuid(raw: &str) -> Result<Uuid, ReportError> {
    Uuid::parse_str(raw).map_err(|_| ReportError::InvalidId {
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_row_accepts_string_costs() {
        let row: ReportItemRowModel = serde_json::from_str(
            r#"{
                "id": "8c7a3a52-6a2e-4f0d-9f43-0f1df0c8a5b1",
                "report_id": "3d0c39a5-1f9e-43e5-8c9b-96cf14ad10de",
                "location": "Lekki",
                "transportation": "Bus",
                "cost": "₦1,500.50"
            }"#,
        )
        .unwrap();
        assert_eq!(row.cost, 1500.50);
    }

    #[test]
    fn report_row_round_trips_to_entity() {
        let row = ReportRowModel {
            id: "3d0c39a5-1f9e-43e5-8c9b-96cf14ad10de".to_string(),
            user_id: "2a9d11de-5349-47a2-a5b4-0ef0f5dc3c44".to_string(),
            report_type: "recovery".to_string(),
            report_date: "2024-05-03".to_string(),
            description: None,
            total_cost: 800.0,
            account_number: "0123456789".to_string(),
            account_name: "Field Officer".to_string(),
            bank_name: "GTBank".to_string(),
            created_at: "2024-05-03T10:15:00Z".to_string(),
            updated_at: "2024-05-03T10:15:00Z".to_string(),
        };
        let report = row.into_report(Vec::new()).unwrap();
        assert_eq!(report.report_type.as_str(), "recovery");
        assert_eq!(report.total_cost, 800.0);
        assert!(report.items.is_empty());
    }

    #[test]
    fn bad_uuid_is_rejected() {
        let mut row = ReportRowModel {
            id: "not-a-uuid".to_string(),
            user_id: String::new(),
            report_type: "recovery".to_string(),
            report_date: "2024-05-03".to_string(),
            description: None,
            total_cost: 0.0,
            account_number: String::new(),
            account_name: String::new(),
            bank_name: String::new(),
            created_at: "2024-05-03T10:15:00Z".to_string(),
            updated_at: "2024-05-03T10:15:00Z".to_string(),
        };
        assert!(matches!(
            row.clone().into_report(Vec::new()),
            Err(ReportError::InvalidId { .. })
        ));
        row.id = "3d0c39a5-1f9e-43e5-8c9b-96cf14ad10de".to_string();
        row.report_type = "audit".to_string();
        assert!(matches!(
            row.into_report(Vec::new()),
            Err(ReportError::InvalidReportType { .. })
        ));
    }
}
