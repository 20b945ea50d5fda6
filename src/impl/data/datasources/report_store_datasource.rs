use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    data::models::report_row_model::{ReportItemRowModel, ReportRowModel},
    entities::UserId,
    errors::ReportError,
};

/// Row-level contract of the persistence collaborator over the two record
/// sets (`reports`, `report_items`). Real deployments implement this against
/// the managed backend; results are scoped per authenticated identity by the
/// backend's access policy.
#[async_trait]
pub trait ReportStoreDatasource: Send + Sync {
    async fn select_reports(&self, user: &UserId) -> Result<Vec<ReportRowModel>, ReportError>;

    /// Items of the given reports, in insertion order.
    async fn select_items(
        &self,
        report_ids: &[String],
    ) -> Result<Vec<ReportItemRowModel>, ReportError>;

    async fn insert_report(&self, row: &ReportRowModel) -> Result<(), ReportError>;

    async fn insert_item(&self, row: &ReportItemRowModel) -> Result<(), ReportError>;

    async fn update_report(&self, row: &ReportRowModel) -> Result<(), ReportError>;

    async fn delete_items(&self, report_id: &str) -> Result<(), ReportError>;

    async fn delete_report(&self, report_id: &str) -> Result<(), ReportError>;
}

/// Embedded in-memory store. Useful offline and as the test fixture; applies
/// the same per-user scoping a backend policy would.
#[derive(Default)]
pub struct MemoryReportStoreDatasource {
    reports: Mutex<Vec<ReportRowModel>>,
    items: Mutex<Vec<ReportItemRowModel>>,
}

impl MemoryReportStoreDatasource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportStoreDatasource for MemoryReportStoreDatasource {
    async fn select_reports(&self, user: &UserId) -> Result<Vec<ReportRowModel>, ReportError> {
        let user_id = user.to_string();
        Ok(self
            .reports
            .lock()
            .await
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn select_items(
        &self,
        report_ids: &[String],
    ) -> Result<Vec<ReportItemRowModel>, ReportError> {
        Ok(self
            .items
            .lock()
            .await
            .iter()
            .filter(|row| report_ids.contains(&row.report_id))
            .cloned()
            .collect())
    }

    async fn insert_report(&self, row: &ReportRowModel) -> Result<(), ReportError> {
        self.reports.lock().await.push(row.clone());
        Ok(())
    }

    async fn insert_item(&self, row: &ReportItemRowModel) -> Result<(), ReportError> {
        self.items.lock().await.push(row.clone());
        Ok(())
    }

    async fn update_report(&self, row: &ReportRowModel) -> Result<(), ReportError> {
        let mut reports = self.reports.lock().await;
        match reports.iter_mut().find(|existing| existing.id == row.id) {
            Some(existing) => {
                *existing = row.clone();
                Ok(())
            }
            None => Err(ReportError::Persistence {
                operation: "update_report",
                details: format!("no row with id {}", row.id),
            }),
        }
    }

    async fn delete_items(&self, report_id: &str) -> Result<(), ReportError> {
        self.items
            .lock()
            .await
            .retain(|row| row.report_id != report_id);
        Ok(())
    }

    async fn delete_report(&self, report_id: &str) -> Result<(), ReportError> {
        self.reports.lock().await.retain(|row| row.id != report_id);
        Ok(())
    }
}
