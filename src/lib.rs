//! Field-visit report management core: record model, report lifecycle,
//! aggregation engine (patterns / routes / transport / insights), and export
//! rendering. Backend persistence, identity, document rendering, and text
//! generation are collaborator traits implemented by the embedding
//! application.

mod r#impl;
pub(crate) use r#impl::data;
pub(crate) use r#impl::domain;
pub use r#impl::exports::*;
pub(crate) use r#impl::presentation;

mod impl_ext;
pub mod ext {
    pub use super::impl_ext::exports::*;
}

pub mod errors;
pub mod util;
