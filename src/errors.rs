use thiserror::Error;

/// Error catalog for the crate. Validation errors are raised before any
/// persistence call; external-service errors are never fatal (callers degrade
/// to a local fallback instead of propagating them).
#[derive(Debug, Error)]
pub enum ReportError {
    // Validation-related.
    #[error("Missing required field: {field}.")]
    MissingField { field: &'static str },
    #[error("Item {index} is incomplete. Each item needs a location, a transportation mode, and a cost greater than zero.")]
    IncompleteItem { index: usize },
    #[error("A report needs at least one line item.")]
    NoItems,

    // Auth-related.
    #[error("No authenticated user. Sign in before reading or modifying reports.")]
    AuthenticationRequired,

    // Persistence-related.
    #[error("Persistence call '{operation}' failed: {details}.")]
    Persistence {
        operation: &'static str,
        details: String,
    },
    #[error("Report not found: {id}.")]
    ReportNotFound { id: String },

    // Parsing-related.
    #[error("Invalid ISO date: {value}.")]
    InvalidIsoDate { value: String },
    #[error("Invalid timestamp: {value}.")]
    InvalidTimestamp { value: String },
    #[error("Invalid report type: '{value}'.")]
    InvalidReportType { value: String },
    #[error("Invalid id: '{value}'.")]
    InvalidId { value: String },
    #[error("Invalid inference config (invalid RON format): {details}.")]
    InvalidConfig { details: String },
    #[error("Error reading file.")]
    Read(#[source] std::io::Error),

    // Export-related.
    #[error("Error writing export: {details}.")]
    Export { details: String },

    // External-service-related.
    #[error("Text generation endpoint failed: {details}.")]
    ExternalService { details: String },
    #[error("Unreplaced placeholders remain in prompt template: {keys:?}.")]
    UnreplacedPlaceholders { keys: Vec<String> },
}
