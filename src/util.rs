use chrono::Utc;
use iso_currency::Currency;

use crate::{
    data::{
        datasources::{
            document_render_datasource::DocumentRenderDatasource,
            identity_datasource::IdentityDatasource,
            report_store_datasource::ReportStoreDatasource,
        },
        repositories::report_repository_impl::ReportRepositoryImpl,
    },
    domain::usecases::{
        analyze_reports_usecase::AnalyzeReportsUsecase,
        report_lifecycle_usecase::ReportLifecycleUsecase,
    },
    entities::{
        ExportDocument, InsightThresholds, Report, ReportDraft, ReportId, VisitAnalysis,
    },
    errors::ReportError,
    presentation::{
        analysis_text_fmt::AnalysisTextPrinter, items_csv::ItemsCsvPrinter,
        report_document::ReportDocumentPrinter, utils::download_data_url,
    },
};

/// One-stop wiring of the lifecycle manager, the aggregation engine, and the
/// export printers over a store and identity collaborator pair. Clients that
/// need finer control can assemble the layers themselves.
pub struct FieldReportsUtil<S, I>
where
    S: ReportStoreDatasource,
    I: IdentityDatasource,
{
    lifecycle: ReportLifecycleUsecase<I, ReportRepositoryImpl<S>>,
    analyzer: AnalyzeReportsUsecase,
    document_printer: ReportDocumentPrinter,
    text_printer: AnalysisTextPrinter,
    csv_printer: ItemsCsvPrinter,
}

impl<S, I> FieldReportsUtil<S, I>
where
    S: ReportStoreDatasource,
    I: IdentityDatasource,
{
    pub fn new(store: S, identity: I) -> Self {
        Self {
            lifecycle: ReportLifecycleUsecase::new(ReportRepositoryImpl::new(store), identity),
            analyzer: AnalyzeReportsUsecase::new(),
            document_printer: ReportDocumentPrinter::new(),
            text_printer: AnalysisTextPrinter::new(),
            csv_printer: ItemsCsvPrinter::new(),
        }
    }

    pub fn with_currency(store: S, identity: I, currency: Currency) -> Self {
        Self {
            document_printer: ReportDocumentPrinter::with_currency(currency),
            ..Self::new(store, identity)
        }
    }

    pub fn with_thresholds(mut self, thresholds: InsightThresholds) -> Self {
        self.analyzer = AnalyzeReportsUsecase::with_thresholds(thresholds);
        self
    }

    // Lifecycle.
    // ---

    /// The current collection, newest first, as of the last refresh.
    pub fn reports(&self) -> &[Report] {
        self.lifecycle.reports()
    }

    pub async fn refresh(&mut self) -> Result<(), ReportError> {
        self.lifecycle.refresh().await
    }

    pub async fn create(&mut self, draft: ReportDraft) -> Result<Report, ReportError> {
        self.lifecycle.create(draft).await
    }

    pub async fn update(
        &mut self,
        id: &ReportId,
        draft: ReportDraft,
    ) -> Result<Report, ReportError> {
        self.lifecycle.update(id, draft).await
    }

    pub async fn delete(&mut self, id: &ReportId) -> Result<(), ReportError> {
        self.lifecycle.delete(id).await
    }

    // Aggregation & export.
    // ---

    /// Recomputes all derived metrics from the mirrored collection.
    pub fn analyze(&self) -> VisitAnalysis {
        self.analyzer.analyze(self.lifecycle.reports())
    }

    pub fn export_document(
        &self,
        id: &ReportId,
        prepared_by: &str,
    ) -> Result<ExportDocument, ReportError> {
        let report = self.find(id)?;
        Ok(self
            .document_printer
            .print_document(report, prepared_by, Utc::now()))
    }

    pub fn export_text_summary(&self) -> String {
        self.text_printer.print_summary(&self.analyze())
    }

    /// Renders the report through the document export collaborator and wraps
    /// the binary as a browser-downloadable data URL.
    pub async fn download_document<R>(
        &self,
        renderer: &R,
        id: &ReportId,
        prepared_by: &str,
    ) -> Result<String, ReportError>
    where
        R: DocumentRenderDatasource,
    {
        let document = self.export_document(id, prepared_by)?;
        let bytes = renderer.render(&document).await?;
        Ok(download_data_url(&bytes, "application/pdf"))
    }

    pub fn export_items_csv(&self, id: &ReportId) -> Result<String, ReportError> {
        self.csv_printer.print_items(self.find(id)?)
    }

    fn find(&self, id: &ReportId) -> Result<&Report, ReportError> {
        self.lifecycle
            .reports()
            .iter()
            .find(|report| report.id == *id)
            .ok_or(ReportError::ReportNotFound { id: id.to_string() })
    }
}
