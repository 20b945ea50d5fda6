use crate::{
    data::{
        datasources::identity_datasource::IdentityDatasource,
        repositories::report_repository_impl::ReportRepositoryImpl,
    },
    domain::repositories::report_repository::ReportRepository,
    entities::{Report, ReportDraft, ReportId, UserId},
    errors::ReportError,
};

/// Orchestrates create/update/delete against the persistence collaborator
/// and keeps an in-memory mirror of the collection fresh. Every successful
/// mutation triggers a full refetch; there is no incremental cache
/// invalidation, and a failed mutation leaves the mirror untouched.
pub(crate) struct ReportLifecycleUsecase<
    I,
    R1 = ReportRepositoryImpl, // Default.
> where
    I: IdentityDatasource,
    R1: ReportRepository,
{
    repository: R1,
    identity: I,
    reports: Vec<Report>,
}

impl<I, R1> ReportLifecycleUsecase<I, R1>
where
    I: IdentityDatasource,
    R1: ReportRepository,
{
    pub(crate) fn new(repository: R1, identity: I) -> Self {
        Self {
            repository,
            identity,
            reports: Vec::new(),
        }
    }

    /// The mirror as of the last refresh, newest first.
    pub(crate) fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub(crate) async fn refresh(&mut self) -> Result<(), ReportError> {
        let user = self.current_user().await?;
        self.reports = self.repository.fetch_all(&user).await?;
        tracing::debug!(count = self.reports.len(), "report mirror refreshed");
        Ok(())
    }

    pub(crate) async fn create(&mut self, draft: ReportDraft) -> Result<Report, ReportError> {
        draft.validate()?;
        let user = self.current_user().await?;
        let created = self.repository.create(&user, draft).await?;
        tracing::debug!(report_id = %created.id, "report created");
        self.reports = self.repository.fetch_all(&user).await?;
        Ok(created)
    }

    pub(crate) async fn update(
        &mut self,
        id: &ReportId,
        draft: ReportDraft,
    ) -> Result<Report, ReportError> {
        draft.validate()?;
        let user = self.current_user().await?;
        let updated = self.repository.replace(&user, id, draft).await?;
        tracing::debug!(report_id = %updated.id, "report replaced");
        self.reports = self.repository.fetch_all(&user).await?;
        Ok(updated)
    }

    pub(crate) async fn delete(&mut self, id: &ReportId) -> Result<(), ReportError> {
        let user = self.current_user().await?;
        self.repository.delete(&user, id).await?;
        tracing::debug!(report_id = %id, "report deleted");
        self.reports = self.repository.fetch_all(&user).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<UserId, ReportError> {
        self.identity
            .current_user()
            .await?
            .ok_or(ReportError::AuthenticationRequired)
    }
}
