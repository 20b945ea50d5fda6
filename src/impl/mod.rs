// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod document_render_datasource;
        pub(crate) mod identity_datasource;
        pub(crate) mod report_store_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod iso_date_model;
        pub(crate) mod money_model;
        pub(crate) mod report_row_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod export;
        pub(crate) mod identity;
        pub(crate) mod insights;
        pub(crate) mod patterns;
        pub(crate) mod report;
        pub(crate) mod routes;
        pub(crate) mod transport;
        pub(crate) mod visit;
    }
    pub(crate) mod logic {
        pub(crate) mod insights_summarizer;
        pub(crate) mod pattern_analyzer;
        pub(crate) mod route_analyzer;
        pub(crate) mod transport_analyzer;
        mod utils;
        pub(crate) mod visit_log;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod analyze_reports_usecase;
        pub(crate) mod report_lifecycle_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod analysis_text_fmt;
    pub(crate) mod items_csv;
    pub(crate) mod report_document;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::export::*;
        pub use crate::domain::entities::identity::*;
        pub use crate::domain::entities::insights::*;
        pub use crate::domain::entities::patterns::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::routes::*;
        pub use crate::domain::entities::transport::*;
        pub use crate::domain::entities::visit::*;
    }

    pub mod datasources {
        pub use crate::data::datasources::document_render_datasource::*;
        pub use crate::data::datasources::identity_datasource::*;
        pub use crate::data::datasources::report_store_datasource::*;
        pub use crate::data::models::report_row_model::*;
    }

    pub mod usecases {
        pub use crate::domain::usecases::analyze_reports_usecase::*;
    }

    pub mod rendering {
        pub use crate::presentation::analysis_text_fmt::*;
        pub use crate::presentation::items_csv::*;
        pub use crate::presentation::report_document::*;
        pub use crate::presentation::utils::*;
    }
}
