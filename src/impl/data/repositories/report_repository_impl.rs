use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use futures::{stream, TryStreamExt};

use crate::{
    data::{
        datasources::report_store_datasource::{
            MemoryReportStoreDatasource, ReportStoreDatasource,
        },
        models::{
            iso_date_model::UtcTimestampModel,
            report_row_model::{ReportItemRowModel, ReportRowModel},
        },
    },
    domain::repositories::report_repository::ReportRepository,
    entities::{ItemId, Report, ReportDraft, ReportId, ReportItem, UserId},
    errors::ReportError,
};

pub(crate) struct ReportRepositoryImpl<
    DS = MemoryReportStoreDatasource, // Default.
> where
    DS: ReportStoreDatasource,
{
    datasource: DS,
}

impl<DS: ReportStoreDatasource> ReportRepositoryImpl<DS> {
    pub(crate) fn new(datasource: DS) -> Self {
        Self { datasource }
    }

    /// Persists the item rows one by one. The collaborator offers no
    /// rollback: if a row fails after the report insert, the error surfaces
    /// to the caller instead of being treated as success.
    async fn insert_items(&self, rows: &[ReportItemRowModel]) -> Result<(), ReportError> {
        stream::iter(rows.iter().map(Ok))
            .try_for_each(|row| self.datasource.insert_item(row))
            .await
    }

    async fn owned_row(
        &self,
        user: &UserId,
        id: &ReportId,
    ) -> Result<ReportRowModel, ReportError> {
        let id_str = id.to_string();
        self.datasource
            .select_reports(user)
            .await?
            .into_iter()
            .find(|row| row.id == id_str)
            .ok_or(ReportError::ReportNotFound { id: id_str })
    }
}

#[async_trait]
impl<DS: ReportStoreDatasource> ReportRepository for ReportRepositoryImpl<DS> {
    async fn fetch_all(&self, user: &UserId) -> Result<Vec<Report>, ReportError> {
        let rows = self.datasource.select_reports(user).await?;
        let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
        let mut items_by_report: HashMap<String, Vec<ReportItemRowModel>> = HashMap::new();
        for item in self.datasource.select_items(&ids).await? {
            items_by_report
                .entry(item.report_id.clone())
                .or_default()
                .push(item);
        }

        let mut reports = rows
            .into_iter()
            .map(|row| {
                let items = items_by_report.remove(&row.id).unwrap_or_default();
                row.into_report(items)
            })
            .collect::<Result<Vec<Report>, ReportError>>()?;
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    async fn create(&self, user: &UserId, draft: ReportDraft) -> Result<Report, ReportError> {
        let now = Utc::now();
        let report = Report {
            id: ReportId::generate(),
            report_type: draft.report_type,
            report_date: draft.report_date,
            description: draft.description,
            total_cost: draft.items.iter().map(|i| i.cost).sum(),
            items: draft
                .items
                .into_iter()
                .map(|item| ReportItem {
                    id: ItemId::generate(),
                    location: item.location,
                    transportation: item.transportation,
                    cost: item.cost,
                })
                .collect(),
            account_number: draft.account_number,
            account_name: draft.account_name,
            bank_name: draft.bank_name,
            created_at: now,
            updated_at: now,
        };

        self.datasource
            .insert_report(&ReportRowModel::from_entity(user, &report))
            .await?;
        let item_rows: Vec<ReportItemRowModel> = report
            .items
            .iter()
            .map(|item| ReportItemRowModel::from_entity(&report.id, item))
            .collect();
        self.insert_items(&item_rows).await?;
        Ok(report)
    }

    async fn replace(
        &self,
        user: &UserId,
        id: &ReportId,
        draft: ReportDraft,
    ) -> Result<Report, ReportError> {
        let existing = self.owned_row(user, id).await?;
        let created_at = existing.created_at.parse::<UtcTimestampModel>()?.into();

        let report = Report {
            id: *id,
            report_type: draft.report_type,
            report_date: draft.report_date,
            description: draft.description,
            total_cost: draft.items.iter().map(|i| i.cost).sum(),
            items: draft
                .items
                .into_iter()
                .map(|item| ReportItem {
                    id: ItemId::generate(),
                    location: item.location,
                    transportation: item.transportation,
                    cost: item.cost,
                })
                .collect(),
            account_number: draft.account_number,
            account_name: draft.account_name,
            bank_name: draft.bank_name,
            created_at,
            updated_at: Utc::now(),
        };

        self.datasource
            .update_report(&ReportRowModel::from_entity(user, &report))
            .await?;

        // Full item replacement: delete everything, then reinsert.
        self.datasource.delete_items(&existing.id).await?;
        let item_rows: Vec<ReportItemRowModel> = report
            .items
            .iter()
            .map(|item| ReportItemRowModel::from_entity(&report.id, item))
            .collect();
        self.insert_items(&item_rows).await?;
        Ok(report)
    }

    async fn delete(&self, user: &UserId, id: &ReportId) -> Result<(), ReportError> {
        let existing = self.owned_row(user, id).await?;
        self.datasource.delete_items(&existing.id).await?;
        self.datasource.delete_report(&existing.id).await?;
        Ok(())
    }
}
