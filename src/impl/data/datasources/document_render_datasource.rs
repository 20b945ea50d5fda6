use async_trait::async_trait;

use crate::{entities::ExportDocument, errors::ReportError};

/// Contract of the document export collaborator: turns the structured
/// paginated content into a downloadable binary (typically PDF). The crate
/// never renders binaries itself.
#[async_trait]
pub trait DocumentRenderDatasource: Send + Sync {
    async fn render(&self, document: &ExportDocument) -> Result<Vec<u8>, ReportError>;
}
