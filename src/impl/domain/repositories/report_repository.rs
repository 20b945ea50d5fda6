use async_trait::async_trait;

use crate::{
    entities::{Report, ReportDraft, ReportId, UserId},
    errors::ReportError,
};

/// Persistence contract in domain terms: fetch all of one user's reports,
/// persist one report-plus-items graph, replace one, delete one (cascading to
/// its items). Ownership scoping is the implementation's concern.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// All reports owned by the user, newest first by creation time.
    async fn fetch_all(&self, user: &UserId) -> Result<Vec<Report>, ReportError>;

    /// Assigns id and timestamps and persists the draft as one logical unit.
    async fn create(&self, user: &UserId, draft: ReportDraft) -> Result<Report, ReportError>;

    /// Replaces the scalar fields and the full item set
    /// (delete-all-then-insert-all, not a diff).
    async fn replace(
        &self,
        user: &UserId,
        id: &ReportId,
        draft: ReportDraft,
    ) -> Result<Report, ReportError>;

    /// Removes the report and cascades item removal.
    async fn delete(&self, user: &UserId, id: &ReportId) -> Result<(), ReportError>;
}
