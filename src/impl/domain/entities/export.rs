/// Structured, paginated export content. The crate lays the document out;
/// turning it into a downloadable binary (typically PDF) is delegated to the
/// document render collaborator.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ExportDocument {
    pub title: String,
    pub pages: Vec<DocumentPage>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct DocumentPage {
    pub blocks: Vec<DocumentBlock>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentBlock {
    Heading(String),
    KeyValue { label: String, value: String },
    Paragraph(String),
    ItemsTable { rows: Vec<ItemRow> },
    TotalRow { label: String, amount: String },
}

/// One table row; the cost is already currency-formatted.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct ItemRow {
    pub location: String,
    pub transportation: String,
    pub cost: String,
}
